use crate::format::format_price;
use crate::models::Hotel;
use crate::ui::Route;
use dioxus::prelude::*;

use super::super::rating::StarRating;

#[component]
pub fn HotelCard(hotel: Hotel) -> Element {
    let cover = hotel.cover_image().map(str::to_string);
    let price = format_price(hotel.price);

    rsx! {
        Link {
            to: Route::HotelDetails {
                hotel_id: hotel.hotel_id,
            },
            class: "flex bg-white rounded-xl shadow hover:shadow-lg transition-shadow overflow-hidden",
            if let Some(src) = cover {
                img { class: "w-64 h-48 object-cover", src: "{src}", alt: "{hotel.title}" }
            } else {
                div { class: "w-64 h-48 bg-gray-200 flex items-center justify-center text-gray-400",
                    "No image"
                }
            }
            div { class: "flex-1 p-4 flex flex-col",
                div { class: "flex items-start justify-between",
                    div {
                        h3 { class: "text-xl font-semibold text-gray-900", "{hotel.title}" }
                        p { class: "text-sm text-gray-500", "{hotel.subtitle}" }
                    }
                    StarRating { rating: hotel.ratings }
                }
                p { class: "text-sm text-gray-600 mt-1", "{hotel.city}" }
                ul { class: "flex flex-wrap gap-2 mt-3",
                    for benefit in hotel.benefits.iter().take(4) {
                        li { class: "text-xs bg-green-50 text-green-700 px-2 py-1 rounded", "{benefit}" }
                    }
                }
                div { class: "mt-auto text-right",
                    span { class: "text-2xl font-bold text-indigo-600", "{price}" }
                    span { class: "text-sm text-gray-500", " / night" }
                }
            }
        }
    }
}
