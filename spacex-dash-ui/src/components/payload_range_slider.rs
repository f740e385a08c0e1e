//! Payload range slider (`payload-slider`).

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_figures::layout::RangeSliderSpec;

#[derive(Props, Clone, PartialEq)]
pub struct PayloadRangeSliderProps {
    pub spec: RangeSliderSpec,
}

/// Two range inputs sharing the slider's bounds and step, with the marks
/// listed underneath. A thumb dragged past the other one stops at it.
#[component]
pub fn PayloadRangeSlider(props: PayloadRangeSliderProps) -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.payload_range)();
    let spec = props.spec;

    let on_low = move |evt: Event<FormData>| {
        if let Ok(low) = evt.value().parse::<f64>() {
            let current = *state.payload_range.peek();
            state.payload_range.set(current.with_low(low));
        }
    };

    let on_high = move |evt: Event<FormData>| {
        if let Ok(high) = evt.value().parse::<f64>() {
            let current = *state.payload_range.peek();
            state.payload_range.set(current.with_high(high));
        }
    };

    rsx! {
        div {
            id: spec.id.as_str(),
            style: "margin: 8px 0 16px 0;",
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                input {
                    r#type: "range",
                    "aria-label": "Minimum payload (kg)",
                    min: "{spec.min}",
                    max: "{spec.max}",
                    step: "{spec.step}",
                    value: "{range.low}",
                    style: "flex: 1;",
                    oninput: on_low,
                }
                input {
                    r#type: "range",
                    "aria-label": "Maximum payload (kg)",
                    min: "{spec.min}",
                    max: "{spec.max}",
                    step: "{spec.step}",
                    value: "{range.high}",
                    style: "flex: 1;",
                    oninput: on_high,
                }
                span {
                    style: "min-width: 120px; font-size: 13px;",
                    "{range.low} - {range.high} kg"
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #666;",
                for mark in spec.marks.iter() {
                    span { key: "{mark.label}", "{mark.label}" }
                }
            }
        }
    }
}
