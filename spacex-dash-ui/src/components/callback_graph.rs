//! Graph container bound to its callback in the registry.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use spacex_figures::callbacks::callback_for;
use spacex_figures::GraphId;

#[derive(Props, Clone, PartialEq)]
pub struct CallbackGraphProps {
    pub id: GraphId,
    /// Minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// A D3 chart container whose content is owned by the callback registered
/// for `id`. The effect subscribes only to that callback's input controls and
/// replaces the chart wholesale on every run.
#[component]
pub fn CallbackGraph(props: CallbackGraphProps) -> Element {
    let state = use_context::<AppState>();
    let graph = props.id;

    use_effect(move || {
        let Some(callback) = callback_for(graph) else {
            log::warn!("[SpaceX] no callback registered for {}", graph);
            return;
        };
        let values = state.control_values(callback.inputs);
        let db = match &*state.dashboard.read() {
            Some(dashboard) => dashboard.db.clone(),
            None => return,
        };

        match callback.invoke(&db, &values) {
            Ok(figure) => {
                log::debug!(
                    "[SpaceX] {} -> '{}' with {} marks",
                    graph,
                    figure.title(),
                    figure.mark_count()
                );
                if let Err(e) = js_bridge::render_figure(graph.as_str(), &figure) {
                    log::error!("[SpaceX] failed to render {}: {:#}", graph, e);
                }
            }
            Err(e) => {
                log::error!("[SpaceX] callback for {} failed: {:#}", graph, e);
                js_bridge::destroy_chart(graph.as_str());
            }
        }
    });

    rsx! {
        div {
            style: "min-height: {props.min_height}px; position: relative; width: 100%;",
            div {
                id: graph.as_str(),
                style: "width: 100%;",
            }
        }
    }
}
