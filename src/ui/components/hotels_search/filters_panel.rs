use crate::search::FilterGroup;
use dioxus::prelude::*;

#[component]
pub fn FiltersPanel(
    groups: Vec<FilterGroup>,
    on_toggle: EventHandler<(String, String)>,
    on_clear: EventHandler<()>,
) -> Element {
    let any_selected = groups
        .iter()
        .flat_map(|g| g.filters.iter())
        .any(|f| f.is_selected);

    rsx! {
        div { class: "bg-white rounded-xl shadow p-4 space-y-6",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold", "Filters" }
                if any_selected {
                    button {
                        class: "text-sm text-indigo-600 hover:underline",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            for group in groups {
                div { key: "{group.group_id}",
                    h3 { class: "text-sm font-medium text-gray-500 uppercase mb-2", "{group.title}" }
                    for filter in group.filters.iter().cloned() {
                        label {
                            key: "{filter.id}",
                            class: "flex items-center gap-2 py-1 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                checked: filter.is_selected,
                                onchange: {
                                    let group_id = group.group_id.clone();
                                    let filter_id = filter.id.clone();
                                    move |_| on_toggle.call((group_id.clone(), filter_id.clone()))
                                },
                            }
                            span { "{filter.title}" }
                        }
                    }
                }
            }
        }
    }
}
