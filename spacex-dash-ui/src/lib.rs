//! Dioxus components and D3.js bridge for the SpaceX launch dashboard.
//!
//! - `js_bridge`: embeds the D3 chart scripts and renders figures via `js_sys::eval()`
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: the widgets the page layout is rendered from

pub mod js_bridge;
pub mod state;
pub mod components;
