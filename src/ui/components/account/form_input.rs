use dioxus::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn FormInput(
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut value = value;
    let border = if error.is_some() {
        "border-red-500"
    } else {
        "border-gray-300"
    };

    rsx! {
        label { class: "block",
            span { class: "text-sm text-gray-600", "{label}" }
            input {
                class: "w-full p-2 border rounded-md {border} disabled:bg-gray-100",
                r#type: "{input_type}",
                value: "{value}",
                disabled,
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(message) = error {
                span { class: "text-xs text-red-600", "{message}" }
            }
        }
    }
}
