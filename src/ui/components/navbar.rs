use crate::ui::Route;
use dioxus::prelude::*;
use tracing::{info, warn};

use super::auth_context::use_auth;
use super::dialog::GlobalDialog;
use super::toast::{use_toast, Toast};

/// Layout with the top navigation bar around every page
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();

    let is_authenticated = *auth.is_authenticated.read();
    let display_name = auth
        .user
        .read()
        .as_ref()
        .map(|u| u.full_name())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Account".to_string());
    let is_admin = auth.is_admin();

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            match auth.logout() {
                Ok(()) => {
                    info!("Logged out");
                    toast.success("You have been logged out");
                }
                Err(e) => {
                    warn!("Logout left stale session data: {}", e);
                    toast.error(format!("Logout failed: {}", e));
                }
            }
            navigator.push(Route::Home {});
        }
    };

    rsx! {
        header { class: "bg-white shadow",
            nav { class: "container mx-auto px-6 py-4 flex items-center justify-between",
                Link { to: Route::Home {}, class: "text-2xl font-bold text-indigo-600", "hotelhub" }
                div { class: "flex items-center gap-4",
                    Link {
                        to: Route::HotelsSearch {
                            query: Default::default(),
                        },
                        class: "text-gray-700 hover:text-indigo-600",
                        "Hotels"
                    }
                    if is_admin {
                        Link {
                            to: Route::AdminDashboard {},
                            class: "text-gray-700 hover:text-indigo-600",
                            "Admin"
                        }
                    }
                    if is_authenticated {
                        Link {
                            to: Route::Profile {},
                            class: "text-gray-700 hover:text-indigo-600",
                            "{display_name}"
                        }
                        button {
                            class: "px-3 py-1 border border-gray-300 rounded-lg hover:bg-gray-100",
                            onclick: on_logout,
                            "Logout"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "px-3 py-1 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700",
                            "Login"
                        }
                        Link {
                            to: Route::Register {},
                            class: "px-3 py-1 border border-indigo-600 text-indigo-600 rounded-lg",
                            "Register"
                        }
                    }
                }
            }
        }
        main { class: "min-h-screen bg-gray-50", Outlet::<Route> {} }
        GlobalDialog {}
        Toast {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "container mx-auto p-12 text-center",
            h1 { class: "text-3xl font-bold mb-4", "Page not found" }
            p { class: "text-gray-600 mb-6", "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "text-indigo-600 underline", "Back to home" }
        }
    }
}
