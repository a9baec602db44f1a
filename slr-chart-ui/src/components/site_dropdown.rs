//! Searchable dropdown for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_dash::layout::{DropdownSpec, SiteOption};
use slr_launch::SiteSelection;

#[derive(Props, Clone, PartialEq)]
pub struct SiteDropdownProps {
    pub spec: DropdownSpec,
}

/// Launch site dropdown.
/// Typing in the search box narrows the options; picking one updates
/// `selected_site` in AppState. A current choice hidden by the filter is
/// shown on top as a disabled entry.
#[component]
pub fn SiteDropdown(props: SiteDropdownProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let selected = (state.selected_site)();
    let filter = query();
    let visible: Vec<SiteOption> = props
        .spec
        .filter_options(&filter)
        .into_iter()
        .cloned()
        .collect();
    let selection_hidden = !props.spec.shows_selection(&filter, selected.value());
    let current_label = props
        .spec
        .label_for(selected.value())
        .map(str::to_string)
        .unwrap_or_else(|| selected.to_string());

    let on_change = move |evt: Event<FormData>| {
        state
            .selected_site
            .set(SiteSelection::from_value(&evt.value()));
    };

    let on_search = move |evt: Event<FormData>| {
        query.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "{props.spec.id}",
                style: "font-weight: bold;",
                "Launch Site: "
            }
            if props.spec.searchable {
                input {
                    r#type: "search",
                    placeholder: "{props.spec.placeholder}",
                    value: "{filter}",
                    oninput: on_search,
                    style: "flex: 1; padding: 4px 8px;",
                }
            }
            select {
                id: "{props.spec.id}",
                onchange: on_change,
                if selection_hidden {
                    option {
                        disabled: true,
                        selected: true,
                        "{current_label}"
                    }
                }
                if visible.is_empty() {
                    option { disabled: true, "No matching sites" }
                }
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
