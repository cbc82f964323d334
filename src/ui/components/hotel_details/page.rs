use crate::ui::{use_api, Route};
use dioxus::prelude::*;

use super::super::rating::StarRating;
use super::booking_card::BookingCard;
use super::reviews::ReviewsSection;

/// Hotel details: gallery, description, reviews and the booking card
#[component]
pub fn HotelDetails(hotel_id: ReadSignal<i64>) -> Element {
    let api = use_api();
    let mut selected_image = use_signal(|| 0usize);

    let hotel_resource = use_resource(move || {
        let api = api.clone();
        let hotel_id = hotel_id();
        async move { api.get_hotel(hotel_id).await }
    });

    let content = match hotel_resource.value().read().as_ref() {
        None => rsx! {
            div { class: "text-center text-gray-500 py-24", "Loading hotel..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "text-center py-24",
                p { class: "text-red-600 mb-4", "Failed to load hotel: {e}" }
                Link {
                    to: Route::HotelsSearch {
                        query: Default::default(),
                    },
                    class: "text-indigo-600 underline",
                    "Back to search"
                }
            }
        },
        Some(Ok(hotel)) => {
            let hotel = hotel.clone();
            let image_count = hotel.images.len();
            let current = selected_image().min(image_count.saturating_sub(1));
            let main_image = hotel.images.get(current).cloned();
            rsx! {
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                    div { class: "lg:col-span-2 bg-white rounded-xl shadow overflow-hidden",
                        if let Some(src) = main_image {
                            img { class: "w-full h-96 object-cover", src: "{src}", alt: "{hotel.title}" }
                        }
                        if image_count > 1 {
                            div { class: "flex gap-2 p-2 overflow-x-auto",
                                for (index, src) in hotel.images.iter().cloned().enumerate() {
                                    img {
                                        key: "{index}",
                                        class: if index == current { "w-24 h-16 object-cover rounded ring-2 ring-indigo-600" } else { "w-24 h-16 object-cover rounded opacity-70 hover:opacity-100" },
                                        src: "{src}",
                                        onclick: move |_| selected_image.set(index),
                                    }
                                }
                            }
                        }
                        div { class: "p-6",
                            div { class: "flex items-center justify-between",
                                h1 { class: "text-3xl font-bold", "{hotel.title}" }
                                StarRating { rating: hotel.ratings }
                            }
                            p { class: "text-gray-500 mt-1", "{hotel.subtitle}" }
                            p { class: "text-gray-600 mt-1", "{hotel.city}" }
                            if let Some(description) = hotel.description.as_ref() {
                                p { class: "text-gray-700 mt-4 whitespace-pre-line", "{description}" }
                            }
                            if !hotel.benefits.is_empty() {
                                h2 { class: "text-lg font-semibold mt-6 mb-2", "What this place offers" }
                                ul { class: "grid grid-cols-2 gap-2",
                                    for benefit in hotel.benefits.iter() {
                                        li { class: "text-green-700", "✓ {benefit}" }
                                    }
                                }
                            }
                        }
                        ReviewsSection { hotel_id: hotel.hotel_id }
                    }
                    div {
                        BookingCard { hotel: hotel.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "container mx-auto px-6 py-8", {content} }
    }
}
