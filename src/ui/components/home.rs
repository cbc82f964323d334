use crate::api::{HotelListing, ListingRequest};
use crate::config::use_config;
use crate::search::{ResultEnvelope, SearchController, POPULAR_DESTINATIONS};
use crate::ui::{use_api, Route, SearchQuery};
use dioxus::prelude::*;
use tracing::debug;

use super::hotels_search::HotelCard;
use super::search_box::{SearchBox, SearchSubmit};

fn city_route(city: &str) -> Route {
    Route::HotelsSearch {
        query: SearchQuery(format!("city={}", urlencoding::encode(city))),
    }
}

/// Landing page: search box, popular destinations and a first page of hotels
#[component]
pub fn Home() -> Element {
    let config = use_config();
    let api = use_api();
    let navigator = use_navigator();
    let page_size = config.page_size;

    let nearby = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.fetch_listing(&ListingRequest::All).await;
            ResultEnvelope::from_result(result, 1, page_size)
        }
    });

    let on_submit = move |submit: SearchSubmit| {
        let mut controller = SearchController::new(page_size);
        controller.submit_search(
            &submit.city,
            submit.num_guests,
            submit.check_in,
            submit.check_out,
        );
        navigator.push(Route::HotelsSearch {
            query: SearchQuery(controller.query_string()),
        });
    };

    let hotels = match nearby.value().read().as_ref() {
        None => rsx! {
            p { class: "text-center text-gray-500 py-8", "Loading hotels..." }
        },
        Some(results) if results.has_errors() => rsx! {
            p { class: "text-center text-red-600 py-8", "Could not load hotels: {results.errors[0]}" }
        },
        Some(results) => {
            debug!("Home shows {} hotels", results.data.len());
            let list = results.data.clone();
            rsx! {
                div { class: "space-y-4",
                    for hotel in list {
                        HotelCard { key: "{hotel.hotel_id}", hotel }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "bg-gradient-to-r from-indigo-600 to-purple-600 text-white",
            div { class: "container mx-auto px-6 py-16",
                h1 { class: "text-4xl font-bold mb-2", "Find your next stay" }
                p { class: "text-lg text-indigo-100 mb-8", "Hotels across Vietnam, priced per night in VND" }
                SearchBox { initial: SearchSubmit::default(), on_submit }
            }
        }
        section { class: "container mx-auto px-6 pt-12",
            h2 { class: "text-2xl font-semibold text-gray-800 mb-4", "Popular destinations" }
            div { class: "grid grid-cols-2 md:grid-cols-5 gap-4",
                for destination in POPULAR_DESTINATIONS {
                    Link {
                        key: "{destination.name}",
                        to: city_route(destination.name),
                        class: "block rounded-xl overflow-hidden shadow hover:shadow-lg transition-shadow bg-white",
                        img {
                            class: "w-full h-32 object-cover",
                            src: destination.image_url,
                            alt: destination.name,
                        }
                        p { class: "px-3 py-2 font-medium text-gray-800", "{destination.name}" }
                    }
                }
            }
        }
        section { class: "container mx-auto px-6 py-12",
            h2 { class: "text-3xl font-medium text-slate-700 text-center mb-6", "Handpicked nearby hotels for you" }
            {hotels}
        }
    }
}
