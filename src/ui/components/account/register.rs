use crate::api::auth::RegisterRequest;
use crate::ui::{use_auth_service, Route};
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::toast::use_toast;
use super::form_input::FormInput;

#[component]
pub fn Register() -> Element {
    let service = use_auth_service();
    let toast = use_toast();
    let navigator = use_navigator();

    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone_number = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = RegisterRequest {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone_number: phone_number(),
            password: password(),
            confirm_password: confirm_password(),
        };
        let service = service.clone();
        spawn(async move {
            is_submitting.set(true);
            match service.register(&request).await {
                Ok(response) => {
                    info!("✓ Registered {}", request.email);
                    toast.success(
                        response
                            .message
                            .unwrap_or_else(|| "Account created, please log in".to_string()),
                    );
                    navigator.push(Route::Login {});
                }
                Err(e) => {
                    warn!("✗ Registration failed: {}", e);
                    error_message.set(Some(e.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        div { class: "container mx-auto max-w-lg px-6 py-12",
            form { class: "bg-white rounded-xl shadow p-8 space-y-4", onsubmit: submit,
                h1 { class: "text-2xl font-bold", "Create an account" }
                div { class: "grid grid-cols-2 gap-4",
                    FormInput { label: "First name", value: first_name }
                    FormInput { label: "Last name", value: last_name }
                }
                FormInput { label: "Email", value: email, input_type: "email" }
                FormInput { label: "Phone number", value: phone_number, input_type: "tel" }
                FormInput { label: "Password", value: password, input_type: "password" }
                FormInput { label: "Confirm password", value: confirm_password, input_type: "password" }
                if let Some(message) = error_message() {
                    p { class: "text-sm text-red-600", "{message}" }
                }
                button {
                    class: "w-full bg-indigo-600 text-white py-2 rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_submitting(),
                    if is_submitting() { "Creating account..." } else { "Register" }
                }
                p { class: "text-sm text-center",
                    "Already have an account? "
                    Link { to: Route::Login {}, class: "text-indigo-600", "Log in" }
                }
            }
        }
    }
}
