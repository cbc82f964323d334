use crate::ui::components::dialog_context::use_dialog;
use dioxus::prelude::*;

#[component]
pub fn GlobalDialog() -> Element {
    let dialog = use_dialog();

    let Some(request) = dialog.current() else {
        return rsx! {};
    };

    let confirm_class = if request.destructive {
        "px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg"
    } else {
        "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg"
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-[3000]",
            onclick: move |_| dialog.hide(),
            div {
                class: "bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "text-xl font-bold text-gray-900 mb-4", "{request.title}" }
                p { class: "text-gray-600 mb-6", "{request.message}" }
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-lg",
                        onclick: move |_| dialog.hide(),
                        "{request.cancel_label}"
                    }
                    button {
                        class: confirm_class,
                        onclick: move |_| dialog.confirm(),
                        "{request.confirm_label}"
                    }
                }
            }
        }
    }
}
