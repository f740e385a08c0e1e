//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single `Copy` struct
//! provided with `use_context_provider`. The control signals are the only
//! mutable UI state; the dashboard itself is written once at startup.

use crate::js_bridge;
use dioxus::prelude::*;
use spacex_figures::{ControlId, ControlValues, Dashboard};
use spacex_records::{PayloadRange, SiteSelection};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Launch database and layout (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether startup is still running
    pub loading: Signal<bool>,
    /// Startup failure, if any; the page shows only this
    pub error_msg: Signal<Option<String>>,
    /// Current value of `site-dropdown`
    pub selected_site: Signal<SiteSelection>,
    /// Current value of `payload-slider`
    pub payload_range: Signal<PayloadRange>,
}

impl AppState {
    pub fn new() -> Self {
        let defaults = ControlValues::default();
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(defaults.site),
            payload_range: Signal::new(defaults.payload_range),
        }
    }

    /// Load the embedded launch table and publish the dashboard.
    ///
    /// On failure the error is kept in `error_msg` and no control or graph is
    /// ever rendered.
    pub fn start(&mut self, csv_data: &str) {
        match Dashboard::load(csv_data) {
            Ok(dashboard) => {
                let initial = dashboard.layout.initial_values();
                self.selected_site.set(initial.site);
                self.payload_range.set(initial.payload_range);
                self.dashboard.set(Some(dashboard));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("[SpaceX] dashboard failed to start: {:#}", e);
                self.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        self.loading.set(false);
    }

    /// Snapshot the control values for a callback.
    ///
    /// Only the listed inputs are read reactively; the others are peeked so a
    /// change to an unbound control does not re-run the callback.
    pub fn control_values(&self, inputs: &[ControlId]) -> ControlValues {
        let site = if inputs.contains(&ControlId::SiteDropdown) {
            self.selected_site.read().clone()
        } else {
            self.selected_site.peek().clone()
        };
        let payload_range = if inputs.contains(&ControlId::PayloadSlider) {
            *self.payload_range.read()
        } else {
            *self.payload_range.peek()
        };
        ControlValues {
            site,
            payload_range,
        }
    }
}
