//! Renders the layout's widget tree in order.

use crate::components::{CallbackGraph, PayloadRangeSlider, SiteDropdown};
use dioxus::prelude::*;
use spacex_figures::layout::Widget;
use spacex_figures::DashboardLayout;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardViewProps {
    pub layout: DashboardLayout,
}

#[component]
pub fn DashboardView(props: DashboardViewProps) -> Element {
    rsx! {
        div {
            for (i, widget) in props.layout.widgets.iter().enumerate() {
                WidgetView { key: "{i}", widget: widget.clone() }
            }
        }
    }
}

#[component]
fn WidgetView(widget: Widget) -> Element {
    match widget {
        Widget::Heading { text, style } => {
            let css = style.to_css();
            rsx! { h1 { style: "{css}", "{text}" } }
        }
        Widget::Dropdown(spec) => rsx! { SiteDropdown { spec } },
        Widget::LineBreak => rsx! { br {} },
        Widget::Graph(id) => rsx! { div { CallbackGraph { id } } },
        Widget::Paragraph(text) => rsx! { p { "{text}" } },
        Widget::RangeSlider(spec) => rsx! { PayloadRangeSlider { spec } },
    }
}
