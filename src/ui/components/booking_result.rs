use crate::format::format_price;
use crate::ui::Route;
use dioxus::prelude::*;

use super::checkout_context::use_checkout;

#[component]
pub fn BookingSuccess(booking_id: i64) -> Element {
    let mut pending = use_checkout();
    // Keep the summary for this page, then release the checkout
    let summary = use_hook(move || pending.peek().clone());
    use_effect(move || pending.set(None));

    rsx! {
        div { class: "container mx-auto p-12 max-w-xl text-center",
            div { class: "text-6xl text-green-500 mb-4", "✓" }
            h1 { class: "text-3xl font-bold mb-2", "Booking confirmed" }
            p { class: "text-gray-600 mb-6", "Booking #{booking_id} is paid. A confirmation has been sent to your email." }
            if let Some(checkout) = summary {
                div { class: "bg-white rounded-xl shadow p-6 text-left space-y-1 mb-6",
                    p { class: "font-semibold", "{checkout.hotel.title}" }
                    p { "{checkout.request.check_in_date} → {checkout.request.check_out_date}" }
                    p { "{checkout.request.room_type}, {checkout.request.number_of_rooms} room(s)" }
                    if let Some(code) = checkout.confirmation_code.as_ref() {
                        p { "Confirmation code: {code}" }
                    }
                    p { class: "font-bold", "Paid: {format_price(checkout.quote.total)}" }
                }
            }
            div { class: "flex gap-4 justify-center",
                Link { to: Route::Profile {}, class: "px-4 py-2 bg-indigo-600 text-white rounded-lg", "My bookings" }
                Link { to: Route::Home {}, class: "px-4 py-2 border rounded-lg", "Home" }
            }
        }
    }
}

#[component]
pub fn BookingFailed() -> Element {
    rsx! {
        div { class: "container mx-auto p-12 max-w-xl text-center",
            div { class: "text-6xl text-red-500 mb-4", "✕" }
            h1 { class: "text-3xl font-bold mb-2", "Payment failed" }
            p { class: "text-gray-600 mb-6",
                "Your booking is still pending. You can retry the payment or cancel it from your profile."
            }
            div { class: "flex gap-4 justify-center",
                Link { to: Route::Checkout {}, class: "px-4 py-2 bg-indigo-600 text-white rounded-lg", "Try again" }
                Link { to: Route::Profile {}, class: "px-4 py-2 border rounded-lg", "My bookings" }
            }
        }
    }
}
