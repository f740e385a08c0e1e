//! SpaceX Launch Records Dashboard
//!
//! A dropdown of launch sites, a payload range slider and two charts: a
//! success pie and a payload-vs-outcome scatter. Both charts are driven by
//! the callback registry in `spacex-figures`.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount the CSV is loaded into an in-memory SQLite database and the
//!    page layout is built from it; a load failure stops here.
//! 4. Each graph re-runs its callback when one of its bound controls changes.
//!
//! Run with `dx serve` from this directory.

use dioxus::prelude::*;
use spacex_dash_ui::components::{DashboardView, StatusBanner};
use spacex_dash_ui::state::AppState;

/// Launch records, one row per launch attempt.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

fn main() {
    let level = if cfg!(debug_assertions) {
        dioxus_logger::tracing::Level::DEBUG
    } else {
        dioxus_logger::tracing::Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("spacex-dash-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Startup: runs once, reads no signals
    use_effect(move || {
        log::info!("[SpaceX] loading {} bytes of launch records", LAUNCH_CSV.len());
        state.start(LAUNCH_CSV);
    });

    let error = (state.error_msg)();
    let loading = (state.loading)();
    let layout = state.dashboard.read().as_ref().map(|d| d.layout.clone());

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = error {
                StatusBanner { error: err }
            } else if loading {
                StatusBanner {}
            } else if let Some(layout) = layout {
                DashboardView { layout }
            }
        }
    }
}
