use crate::ui::{use_auth_service, Route};
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::toast::use_toast;
use super::form_input::FormInput;

/// Step 1: ask for a one-time code by email
#[component]
pub fn ForgotPassword() -> Element {
    let service = use_auth_service();
    let toast = use_toast();
    let navigator = use_navigator();
    let email = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let service = service.clone();
        spawn(async move {
            is_submitting.set(true);
            let address = email().trim().to_string();
            match service.request_otp(&address).await {
                Ok(_) => {
                    info!("OTP requested for {}", address);
                    toast.info("We sent a 6-digit code to your email");
                    navigator.push(Route::VerifyOtp { email: address });
                }
                Err(e) => {
                    warn!("✗ OTP request failed: {}", e);
                    error_message.set(Some(e.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        RecoveryCard { title: "Forgot your password?",
            form { class: "space-y-4", onsubmit: submit,
                p { class: "text-gray-600 text-sm", "Enter your account email and we will send you a code." }
                FormInput { label: "Email", value: email, input_type: "email" }
                if let Some(message) = error_message() {
                    p { class: "text-sm text-red-600", "{message}" }
                }
                button {
                    class: "w-full bg-indigo-600 text-white py-2 rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_submitting(),
                    "Send code"
                }
            }
        }
    }
}

/// Step 2: check the code
#[component]
pub fn VerifyOtp(email: String) -> Element {
    let service = use_auth_service();
    let navigator = use_navigator();
    let toast = use_toast();
    let code = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let submit = {
        let service = service.clone();
        let email = email.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let service = service.clone();
            let email = email.clone();
            spawn(async move {
                is_submitting.set(true);
                let otp = code().trim().to_string();
                match service.verify_otp(&email, &otp).await {
                    Ok(_) => {
                        navigator.push(Route::ResetPassword { email, otp });
                    }
                    Err(e) => {
                        warn!("✗ OTP verification failed: {}", e);
                        error_message.set(Some(e.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    let resend = {
        let service = service.clone();
        let email = email.clone();
        move |_| {
            let service = service.clone();
            let email = email.clone();
            spawn(async move {
                match service.request_otp(&email).await {
                    Ok(_) => toast.info("A new code is on its way"),
                    Err(e) => toast.error(format!("Could not resend code: {}", e)),
                }
            });
        }
    };

    rsx! {
        RecoveryCard { title: "Enter your code",
            form { class: "space-y-4", onsubmit: submit,
                p { class: "text-gray-600 text-sm", "We sent a 6-digit code to {email}." }
                FormInput { label: "Code", value: code }
                if let Some(message) = error_message() {
                    p { class: "text-sm text-red-600", "{message}" }
                }
                button {
                    class: "w-full bg-indigo-600 text-white py-2 rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_submitting(),
                    "Verify"
                }
                button {
                    class: "w-full text-sm text-indigo-600",
                    r#type: "button",
                    onclick: resend,
                    "Resend code"
                }
            }
        }
    }
}

/// Step 3: choose a new password
#[component]
pub fn ResetPassword(email: String, otp: String) -> Element {
    let service = use_auth_service();
    let navigator = use_navigator();
    let toast = use_toast();
    let new_password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let service = service.clone();
        let email = email.clone();
        let otp = otp.clone();
        spawn(async move {
            is_submitting.set(true);
            match service
                .reset_password(&email, &otp, &new_password(), &confirm_password())
                .await
            {
                Ok(_) => {
                    info!("Password reset for {}", email);
                    toast.success("Password updated, please log in");
                    navigator.push(Route::Login {});
                }
                Err(e) => {
                    warn!("✗ Password reset failed: {}", e);
                    error_message.set(Some(e.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        RecoveryCard { title: "Choose a new password",
            form { class: "space-y-4", onsubmit: submit,
                FormInput { label: "New password", value: new_password, input_type: "password" }
                FormInput { label: "Confirm password", value: confirm_password, input_type: "password" }
                if let Some(message) = error_message() {
                    p { class: "text-sm text-red-600", "{message}" }
                }
                button {
                    class: "w-full bg-indigo-600 text-white py-2 rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_submitting(),
                    "Reset password"
                }
            }
        }
    }
}

#[component]
fn RecoveryCard(title: String, children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto max-w-md px-6 py-12",
            div { class: "bg-white rounded-xl shadow p-8 space-y-4",
                h1 { class: "text-2xl font-bold", "{title}" }
                {children}
                Link { to: Route::Login {}, class: "block text-sm text-center text-indigo-600", "Back to login" }
            }
        }
    }
}
