//! Startup status: loading notice or the fatal startup error.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    /// Startup error; `None` shows the loading notice
    pub error: Option<String>,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Dashboard failed to start: " }
                "{message}"
            }
        },
        None => rsx! {
            div {
                style: "display: flex; justify-content: center; padding: 40px; color: #666;",
                "Loading launch records..."
            }
        },
    }
}
