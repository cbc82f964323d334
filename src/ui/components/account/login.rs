use crate::ui::{use_auth_service, Route};
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::auth_context::use_auth;
use super::super::toast::use_toast;
use super::form_input::FormInput;

#[component]
pub fn Login() -> Element {
    let service = use_auth_service();
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let service = service.clone();
        let auth = auth.clone();
        spawn(async move {
            is_submitting.set(true);
            match service.login(&email(), &password()).await {
                Ok(user) => {
                    info!("✓ Logged in as {}", user.email);
                    auth.trigger_auth_check();
                    error_message.set(None);
                    toast.success(format!("Welcome back, {}", user.full_name()));
                    if user.is_admin() {
                        navigator.push(Route::AdminDashboard {});
                    } else {
                        navigator.push(Route::Home {});
                    }
                }
                Err(e) => {
                    warn!("✗ Login failed: {}", e);
                    error_message.set(Some(e.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        div { class: "container mx-auto max-w-md px-6 py-12",
            form { class: "bg-white rounded-xl shadow p-8 space-y-4", onsubmit: submit,
                h1 { class: "text-2xl font-bold", "Log in" }
                FormInput { label: "Email", value: email, input_type: "email" }
                FormInput { label: "Password", value: password, input_type: "password" }
                if let Some(message) = error_message() {
                    p { class: "text-sm text-red-600", "{message}" }
                }
                button {
                    class: "w-full bg-indigo-600 text-white py-2 rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_submitting(),
                    if is_submitting() { "Logging in..." } else { "Log in" }
                }
                div { class: "flex justify-between text-sm",
                    Link { to: Route::ForgotPassword {}, class: "text-indigo-600", "Forgot password?" }
                    Link { to: Route::Register {}, class: "text-indigo-600", "Create an account" }
                }
            }
        }
    }
}
