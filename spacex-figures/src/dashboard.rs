//! Startup sequence shared by the web app and the CLI.

use crate::callbacks::{callback_for, ControlValues, GraphId, CALLBACKS};
use crate::figure::Figure;
use crate::layout::{build_layout, DashboardLayout};
use anyhow::Context;
use spacex_db::Database;

/// The loaded launch table plus the layout built from it.
///
/// Created once at startup; clones share the same database.
#[derive(Clone)]
pub struct Dashboard {
    pub db: Database,
    pub layout: DashboardLayout,
}

impl Dashboard {
    /// Load the CSV, build the layout and check the callback wiring.
    /// Any failure here means the dashboard must not start.
    pub fn load(csv_data: &str) -> anyhow::Result<Self> {
        let db = Database::from_csv(csv_data).context("Failed to load launch records")?;
        let layout = build_layout(&db).context("Failed to build dashboard layout")?;
        layout
            .validate_wiring(CALLBACKS)
            .context("Dashboard callback wiring is broken")?;
        Ok(Self { db, layout })
    }

    /// Run the callback that owns `graph` with the given control values.
    pub fn render(&self, graph: GraphId, values: &ControlValues) -> anyhow::Result<Figure> {
        let callback =
            callback_for(graph).with_context(|| format!("No callback bound to '{}'", graph))?;
        callback.invoke(&self.db, values)
    }
}
