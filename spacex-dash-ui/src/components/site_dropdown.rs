//! Searchable launch site dropdown (`site-dropdown`).

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_figures::layout::{DropdownOption, DropdownSpec};
use spacex_records::SiteSelection;

#[derive(Props, Clone, PartialEq)]
pub struct SiteDropdownProps {
    pub spec: DropdownSpec,
}

/// Site selector. Typing in the search box narrows the option list; the
/// current selection always stays listed so the `select` never shows a value
/// other than the one the charts are using.
#[component]
pub fn SiteDropdown(props: SiteDropdownProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let selected = (state.selected_site)();
    let spec = props.spec;

    let mut visible: Vec<DropdownOption> = spec.search(&query()).into_iter().cloned().collect();
    if !visible.iter().any(|o| o.value == selected.value()) {
        if let Some(current) = spec.options.iter().find(|o| o.value == selected.value()) {
            visible.insert(0, current.clone());
        }
    }

    let on_change = move |evt: Event<FormData>| {
        let selection = SiteSelection::from_value(&evt.value());
        log::debug!("[SpaceX] site-dropdown -> {}", selection.value());
        state.selected_site.set(selection);
    };

    let on_search = move |evt: Event<FormData>| {
        query.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            if spec.searchable {
                input {
                    r#type: "search",
                    placeholder: "{spec.placeholder}",
                    value: "{query}",
                    style: "flex: 1; padding: 6px;",
                    oninput: on_search,
                }
            }
            select {
                id: spec.id.as_str(),
                style: "flex: 2; padding: 6px;",
                onchange: on_change,
                for opt in visible.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected.value(),
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
