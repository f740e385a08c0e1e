//! Everything the dashboard needs that does not touch the browser.
//!
//! - `figure`: serializable chart descriptions consumed by the D3 scripts
//! - `handlers`: the pie and scatter filter-and-aggregate operations
//! - `layout`: the page's widget tree, built once from the database
//! - `callbacks`: the static mapping from input controls to output graphs
//! - `dashboard`: loads the table, builds the layout and checks the wiring

pub mod callbacks;
pub mod dashboard;
pub mod figure;
pub mod handlers;
pub mod layout;

pub use callbacks::{Callback, ControlId, ControlValues, GraphId, CALLBACKS};
pub use dashboard::Dashboard;
pub use figure::Figure;
pub use layout::{build_layout, DashboardLayout};
