//! Static callback registry.
//!
//! Each [`Callback`] binds a set of input controls to exactly one output
//! graph through a handler. The page re-runs a callback whenever one of its
//! inputs changes and replaces the graph with the returned figure. The
//! identifiers double as DOM ids, so they must match the layout exactly;
//! [`crate::DashboardLayout::validate_wiring`] checks that at startup.

use crate::figure::Figure;
use crate::handlers::{pie_chart, scatter_chart};
use crate::layout::{SLIDER_MAX, SLIDER_MIN};
use spacex_db::Database;
use spacex_records::{PayloadRange, SiteSelection};
use std::fmt;

/// Input control identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output graph identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl GraphId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GraphId::SuccessPieChart => "success-pie-chart",
            GraphId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every control's current value, copied into each invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValues {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(SLIDER_MIN, SLIDER_MAX),
        }
    }
}

pub type Handler = fn(&Database, &ControlValues) -> anyhow::Result<Figure>;

#[derive(Debug, Clone, Copy)]
pub struct Callback {
    pub inputs: &'static [ControlId],
    pub output: GraphId,
    handler: Handler,
}

impl Callback {
    pub fn invoke(&self, db: &Database, values: &ControlValues) -> anyhow::Result<Figure> {
        log::debug!(
            "[SpaceX] callback: {:?} -> {}",
            self.inputs.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            self.output
        );
        (self.handler)(db, values)
    }

    pub fn is_triggered_by(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

fn update_pie_chart(db: &Database, values: &ControlValues) -> anyhow::Result<Figure> {
    pie_chart(db, &values.site)
}

fn update_scatter_chart(db: &Database, values: &ControlValues) -> anyhow::Result<Figure> {
    scatter_chart(db, &values.site, &values.payload_range)
}

pub const CALLBACKS: &[Callback] = &[
    Callback {
        inputs: &[ControlId::SiteDropdown],
        output: GraphId::SuccessPieChart,
        handler: update_pie_chart,
    },
    Callback {
        inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
        output: GraphId::SuccessPayloadScatterChart,
        handler: update_scatter_chart,
    },
];

/// The callback that owns `output`, if any.
pub fn callback_for(output: GraphId) -> Option<&'static Callback> {
    CALLBACKS.iter().find(|cb| cb.output == output)
}

/// Every callback that must re-run when `control` changes.
pub fn triggered_by(control: ControlId) -> impl Iterator<Item = &'static Callback> {
    CALLBACKS.iter().filter(move |cb| cb.is_triggered_by(control))
}
