use crate::api::auth::{PasswordChange, ProfileUpdate};
use crate::format::format_price;
use crate::models::{Booking, UserProfile};
use crate::ui::{use_api, use_auth_service, Route};
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::auth_context::use_auth;
use super::super::status_badge::StatusBadge;
use super::super::toast::use_toast;
use super::form_input::FormInput;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProfileTab {
    Bookings,
    Details,
}

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut tab = use_signal(|| ProfileTab::Bookings);

    let authenticated = auth.is_authenticated;
    let is_authenticated = *authenticated.read();
    use_effect(move || {
        if !*authenticated.read() {
            navigator.push(Route::Login {});
        }
    });

    let Some(user) = auth.user.read().clone().filter(|_| is_authenticated) else {
        return rsx! {
            p { class: "p-12 text-center text-gray-500", "Redirecting to login..." }
        };
    };

    let tab_class = move |t: ProfileTab| {
        if tab() == t {
            "px-4 py-2 border-b-2 border-indigo-600 text-indigo-600 font-medium"
        } else {
            "px-4 py-2 text-gray-600"
        }
    };

    rsx! {
        div { class: "container mx-auto max-w-4xl px-6 py-10",
            h1 { class: "text-3xl font-bold mb-1", "{user.full_name()}" }
            p { class: "text-gray-500 mb-6", "{user.email}" }
            div { class: "flex gap-2 border-b mb-6",
                button {
                    class: tab_class(ProfileTab::Bookings),
                    onclick: move |_| tab.set(ProfileTab::Bookings),
                    "My bookings"
                }
                button {
                    class: tab_class(ProfileTab::Details),
                    onclick: move |_| tab.set(ProfileTab::Details),
                    "Account details"
                }
            }
            {
                match tab() {
                    ProfileTab::Bookings => rsx! {
                        BookingsPanel { user_id: user.user_id }
                    },
                    ProfileTab::Details => rsx! {
                        DetailsPanel { user: user.clone() }
                        PasswordPanel {}
                    },
                }
            }
        }
    }
}

#[component]
fn BookingsPanel(user_id: Option<i64>) -> Element {
    let api = use_api();
    let bookings = use_resource(move || {
        let api = api.clone();
        async move {
            match user_id {
                Some(id) => api.user_bookings(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let body = match bookings.value().read().as_ref() {
        None => rsx! {
            p { class: "text-gray-500", "Loading bookings..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "text-red-600", "Could not load your bookings: {e}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "text-center text-gray-500 py-8",
                p { class: "mb-4", "You have no bookings yet." }
                Link {
                    to: Route::HotelsSearch {
                        query: Default::default(),
                    },
                    class: "text-indigo-600 underline",
                    "Find a hotel"
                }
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "space-y-4",
                for booking in list.iter().cloned() {
                    BookingRow { key: "{booking.booking_id}", booking }
                }
            }
        },
    };
    body
}

#[component]
fn BookingRow(booking: Booking) -> Element {
    let dates = match (booking.check_in_date, booking.check_out_date) {
        (Some(check_in), Some(check_out)) => format!("{} → {}", check_in, check_out),
        _ => "Dates not set".to_string(),
    };
    let room = booking.room_type.clone().unwrap_or_default();
    let rooms = booking.number_of_rooms.unwrap_or(1);
    let guests = booking.number_of_guests.unwrap_or(1);

    rsx! {
        div { class: "bg-white rounded-xl shadow p-4 flex justify-between items-center",
            div {
                p { class: "font-semibold", "{booking.display_hotel_name()}" }
                p { class: "text-sm text-gray-600", "{dates}" }
                p { class: "text-sm text-gray-600", "{room} · {rooms} room(s) · {guests} guest(s)" }
            }
            div { class: "text-right space-y-2",
                StatusBadge { status: booking.payment_status }
                p { class: "font-bold", "{format_price(booking.amount())}" }
            }
        }
    }
}

#[component]
fn DetailsPanel(user: UserProfile) -> Element {
    let service = use_auth_service();
    let auth = use_auth();
    let toast = use_toast();

    let first_name = use_signal(|| user.first_name.clone());
    let last_name = use_signal(|| user.last_name.clone());
    let phone_number = use_signal(|| user.phone_number.clone().unwrap_or_default());
    let country = use_signal(|| user.country.clone().unwrap_or_default());
    let email = use_signal(|| user.email.clone());
    let mut is_saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let update = ProfileUpdate {
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
            phone_number: phone_number().trim().to_string(),
            country: country().trim().to_string(),
        };
        let service = service.clone();
        let auth = auth.clone();
        spawn(async move {
            is_saving.set(true);
            match service.update_profile(&update).await {
                Ok(user) => {
                    info!("✓ Profile updated for {}", user.email);
                    auth.trigger_auth_check();
                    toast.success("Profile updated");
                }
                Err(e) => {
                    warn!("✗ Profile update failed: {}", e);
                    toast.error(format!("Could not update profile: {}", e));
                }
            }
            is_saving.set(false);
        });
    };

    rsx! {
        form { class: "bg-white rounded-xl shadow p-6 space-y-4 mb-6", onsubmit: submit,
            h2 { class: "text-xl font-semibold", "Personal information" }
            div { class: "grid grid-cols-2 gap-4",
                FormInput { label: "First name", value: first_name }
                FormInput { label: "Last name", value: last_name }
            }
            FormInput { label: "Email", value: email, disabled: true }
            div { class: "grid grid-cols-2 gap-4",
                FormInput { label: "Phone number", value: phone_number, input_type: "tel" }
                FormInput { label: "Country", value: country }
            }
            button {
                class: "px-4 py-2 bg-indigo-600 text-white rounded-lg disabled:opacity-50",
                r#type: "submit",
                disabled: is_saving(),
                "Save changes"
            }
        }
    }
}

#[component]
fn PasswordPanel() -> Element {
    let service = use_auth_service();
    let toast = use_toast();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let change = PasswordChange {
            current_password: current_password(),
            new_password: new_password(),
            confirm_password: confirm_password(),
        };
        let service = service.clone();
        spawn(async move {
            match service.change_password(&change).await {
                Ok(_) => {
                    info!("✓ Password changed");
                    toast.success("Password changed");
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => {
                    warn!("✗ Password change failed: {}", e);
                    toast.error(e.to_string());
                }
            }
        });
    };

    rsx! {
        form { class: "bg-white rounded-xl shadow p-6 space-y-4", onsubmit: submit,
            h2 { class: "text-xl font-semibold", "Change password" }
            FormInput { label: "Current password", value: current_password, input_type: "password" }
            FormInput { label: "New password", value: new_password, input_type: "password" }
            FormInput { label: "Confirm new password", value: confirm_password, input_type: "password" }
            button { class: "px-4 py-2 bg-indigo-600 text-white rounded-lg", r#type: "submit", "Change password" }
        }
    }
}
