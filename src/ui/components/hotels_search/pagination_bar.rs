use crate::search::PageWindow;
use dioxus::prelude::*;

#[component]
pub fn PaginationBar(window: PageWindow, on_change: EventHandler<u32>) -> Element {
    if window.total <= 1 {
        return rsx! {};
    }

    let base = "px-3 py-1 rounded-lg border";

    rsx! {
        nav { class: "flex items-center justify-center gap-2 mt-8",
            button {
                class: "{base} border-gray-300 disabled:opacity-40",
                disabled: !window.has_previous(),
                onclick: move |_| {
                    if let Some(page) = window.previous() {
                        on_change.call(page);
                    }
                },
                "‹ Previous"
            }
            for page in window.pages() {
                button {
                    key: "{page}",
                    class: if page == window.current { "{base} bg-indigo-600 text-white border-indigo-600" } else { "{base} border-gray-300 hover:bg-gray-100" },
                    onclick: move |_| on_change.call(page),
                    "{page}"
                }
            }
            button {
                class: "{base} border-gray-300 disabled:opacity-40",
                disabled: !window.has_next(),
                onclick: move |_| {
                    if let Some(page) = window.next() {
                        on_change.call(page);
                    }
                },
                "Next ›"
            }
        }
    }
}
