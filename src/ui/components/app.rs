use crate::ui::{Route, MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::auth_context::AuthStateProvider;
use super::checkout_context::CheckoutStateProvider;
use super::dialog_context::DialogProvider;
use super::toast::ToastProvider;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        AuthStateProvider {
            ToastProvider {
                DialogProvider {
                    CheckoutStateProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
