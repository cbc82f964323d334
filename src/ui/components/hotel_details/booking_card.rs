use crate::booking::{BookingForm, RoomType, MAX_GUESTS, MAX_ROOMS};
use crate::format::format_price;
use crate::models::Hotel;
use crate::ui::{use_api, Route};
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::auth_context::use_auth;
use super::super::checkout_context::{use_checkout, PendingCheckout};

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Dates, guests, rooms and room type, with a live price quote
#[component]
pub fn BookingCard(hotel: Hotel) -> Element {
    let api = use_api();
    let auth = use_auth();
    let navigator = use_navigator();
    let mut pending = use_checkout();

    let hotel_id = hotel.hotel_id;
    let mut form = use_signal(move || BookingForm {
        check_in: Some(Local::now().date_naive()),
        ..BookingForm::new(hotel_id)
    });
    let mut error_message = use_signal(|| None::<String>);
    let mut is_processing = use_signal(|| false);

    let quote = form.read().quote(hotel.price);
    let current = form.read().clone();

    let on_confirm = {
        let hotel = hotel.clone();
        move |_| {
            if !*auth.is_authenticated.peek() {
                navigator.push(Route::Login {});
                return;
            }

            let user = auth.user.peek().clone();
            let request = match form.peek().to_request(user.as_ref()) {
                Ok(request) => request,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };
            error_message.set(None);

            let api = api.clone();
            let hotel = hotel.clone();
            let quote = form.peek().quote(hotel.price);
            spawn(async move {
                is_processing.set(true);
                match api.create_booking(&request).await {
                    Ok(created) => {
                        info!(
                            "✓ Booking created for hotel {}: {:?}",
                            hotel.hotel_id, created.booking_id
                        );
                        pending.set(Some(PendingCheckout {
                            booking_id: created.booking_id,
                            confirmation_code: created.confirmation_code,
                            hotel,
                            request,
                            quote,
                        }));
                        navigator.push(Route::Checkout {});
                    }
                    Err(e) => {
                        warn!("✗ Booking failed: {}", e);
                        error_message.set(Some(format!("Could not create booking: {}", e)));
                    }
                }
                is_processing.set(false);
            });
        }
    };

    rsx! {
        div { class: "bg-white rounded-xl shadow p-6 sticky top-6 space-y-4",
            div {
                span { class: "text-2xl font-bold text-indigo-600", "{format_price(hotel.price)}" }
                span { class: "text-gray-500", " / night" }
            }

            div { class: "grid grid-cols-2 gap-2",
                label { class: "text-sm text-gray-600",
                    "Check-in"
                    input {
                        class: "w-full border border-gray-300 rounded-lg px-2 py-1",
                        r#type: "date",
                        value: "{date_value(current.check_in)}",
                        oninput: move |evt| form.write().check_in = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok(),
                    }
                }
                label { class: "text-sm text-gray-600",
                    "Check-out"
                    input {
                        class: "w-full border border-gray-300 rounded-lg px-2 py-1",
                        r#type: "date",
                        value: "{date_value(current.check_out)}",
                        oninput: move |evt| form.write().check_out = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok(),
                    }
                }
            }

            label { class: "block text-sm text-gray-600",
                "Room type"
                select {
                    class: "w-full border border-gray-300 rounded-lg px-2 py-1",
                    onchange: move |evt| {
                        if let Some(room_type) = RoomType::from_label(&evt.value()) {
                            form.write().room_type = room_type;
                        }
                    },
                    for room_type in RoomType::ALL {
                        option {
                            key: "{room_type.label()}",
                            value: room_type.label(),
                            selected: room_type == current.room_type,
                            "{room_type}"
                        }
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-2",
                label { class: "text-sm text-gray-600",
                    "Guests"
                    select {
                        class: "w-full border border-gray-300 rounded-lg px-2 py-1",
                        onchange: move |evt| {
                            if let Ok(n) = evt.value().parse::<u32>() {
                                form.write().guests = n;
                            }
                        },
                        for n in 1..=MAX_GUESTS {
                            option { key: "{n}", value: "{n}", selected: n == current.guests, "{n} guests" }
                        }
                    }
                }
                label { class: "text-sm text-gray-600",
                    "Rooms"
                    select {
                        class: "w-full border border-gray-300 rounded-lg px-2 py-1",
                        onchange: move |evt| {
                            if let Ok(n) = evt.value().parse::<u32>() {
                                form.write().rooms = n;
                            }
                        },
                        for n in 1..=MAX_ROOMS {
                            option {
                                key: "{n}",
                                value: "{n}",
                                selected: n == current.rooms,
                                if n == 1 { "1 room" } else { "{n} rooms" }
                            }
                        }
                    }
                }
            }

            dl { class: "text-sm space-y-1 border-t border-gray-100 pt-3",
                div { class: "flex justify-between",
                    dt { "{quote.nights} night(s) × {quote.rooms} room(s)" }
                    dd { "{format_price(quote.subtotal)}" }
                }
                div { class: "flex justify-between",
                    dt { "Taxes (8%)" }
                    dd { "{format_price(quote.tax)}" }
                }
                div { class: "flex justify-between font-bold text-base",
                    dt { "Total" }
                    dd { class: "text-indigo-600", "{format_price(quote.total)}" }
                }
            }

            if let Some(message) = error_message() {
                p { class: "text-sm text-red-600", "{message}" }
            }

            button {
                class: "w-full bg-indigo-600 text-white py-3 rounded-lg hover:bg-indigo-700 disabled:opacity-50",
                disabled: is_processing(),
                onclick: on_confirm,
                if is_processing() { "Processing..." } else { "Book now" }
            }
        }
    }
}
