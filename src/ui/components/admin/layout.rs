use crate::ui::Route;
use dioxus::prelude::*;
use tracing::warn;

use super::super::auth_context::use_auth;

/// Sidebar shell for the back-office; only admins get past it
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let authenticated = auth.is_authenticated;
    use_effect(move || {
        if !*authenticated.read() {
            warn!("Admin area requested without a session");
            navigator.push(Route::Login {});
        }
    });

    if !auth.is_admin() {
        return rsx! {
            div { class: "container mx-auto p-12 text-center",
                h1 { class: "text-2xl font-bold mb-4", "Access denied" }
                p { class: "text-gray-600 mb-6", "This area is reserved for administrators." }
                Link { to: Route::Home {}, class: "text-indigo-600 underline", "Back to home" }
            }
        };
    }

    let item = |target: Route, label: &'static str| {
        let active = route == target;
        let class = if active {
            "block px-4 py-2 rounded-lg bg-indigo-600 text-white"
        } else {
            "block px-4 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
        };
        rsx! {
            Link { to: target, class: "{class}", "{label}" }
        }
    };

    rsx! {
        div { class: "flex min-h-screen",
            aside { class: "w-60 bg-gray-800 p-4 space-y-2",
                h2 { class: "text-white text-lg font-bold px-4 mb-4", "Back office" }
                {item(Route::AdminDashboard {}, "Dashboard")}
                {item(Route::AdminBookings {}, "Bookings")}
                {item(Route::RoomManagement {}, "Hotels")}
                {item(Route::Home {}, "Back to site")}
            }
            section { class: "flex-1 p-8 bg-gray-50", Outlet::<Route> {} }
        }
    }
}
