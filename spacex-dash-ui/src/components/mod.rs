//! Dioxus RSX components the dashboard page is rendered from.

mod callback_graph;
mod dashboard_view;
mod payload_range_slider;
mod site_dropdown;
mod status_banner;

pub use callback_graph::CallbackGraph;
pub use dashboard_view::DashboardView;
pub use payload_range_slider::PayloadRangeSlider;
pub use site_dropdown::SiteDropdown;
pub use status_banner::StatusBanner;
