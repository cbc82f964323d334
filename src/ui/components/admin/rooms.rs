use crate::format::format_price;
use crate::models::Hotel;
use crate::search::PageWindow;
use crate::ui::{use_api, Route};
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::dialog_context::{use_dialog, ConfirmRequest};
use super::super::hotels_search::PaginationBar;
use super::super::toast::use_toast;

const ROOMS_PAGE_SIZE: usize = 3;

#[component]
pub fn RoomManagement() -> Element {
    let api = use_api();
    let toast = use_toast();
    let dialog = use_dialog();
    let mut page = use_signal(|| 1u32);
    let reload = use_signal(|| 0u32);

    let loader_api = api.clone();
    let hotels = use_resource(move || {
        let api = loader_api.clone();
        let _ = reload();
        async move { api.list_hotels().await }
    });

    let on_delete = use_callback(move |hotel: Hotel| {
        let api = api.clone();
        let hotel_id = hotel.hotel_id;
        dialog.ask(
            ConfirmRequest::new(
                "Delete hotel",
                format!("Delete \"{}\"? This cannot be undone.", hotel.title),
                move || {
                    let api = api.clone();
                    let mut reload = reload;
                    spawn(async move {
                        match api.delete_hotel(hotel_id).await {
                            Ok(_) => {
                                info!("✓ Deleted hotel {}", hotel_id);
                                toast.success("Hotel deleted");
                                reload.set(reload() + 1);
                            }
                            Err(e) => {
                                warn!("✗ Delete of hotel {} failed: {}", hotel_id, e);
                                toast.error(format!("Could not delete hotel: {}", e));
                            }
                        }
                    });
                },
            )
            .labels("Delete", "Cancel")
            .destructive(),
        );
    });

    let body = match hotels.value().read().as_ref() {
        None => rsx! {
            p { class: "text-gray-500", "Loading hotels..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "text-red-600", "Could not load hotels: {e}" }
        },
        Some(Ok(list)) => {
            let total = list.len().div_ceil(ROOMS_PAGE_SIZE) as u32;
            // A delete can empty the last page
            let window = PageWindow::new(page(), total);
            let shown: Vec<Hotel> = list
                .iter()
                .skip((window.current as usize - 1) * ROOMS_PAGE_SIZE)
                .take(ROOMS_PAGE_SIZE)
                .cloned()
                .collect();
            rsx! {
                if shown.is_empty() {
                    p { class: "text-gray-500 py-8 text-center", "No hotels yet" }
                }
                div { class: "space-y-4",
                    for hotel in shown {
                        HotelRow { key: "{hotel.hotel_id}", hotel, on_delete }
                    }
                }
                PaginationBar { window, on_change: move |n: u32| page.set(n) }
            }
        }
    };

    rsx! {
        div { class: "flex justify-between items-center mb-6",
            h1 { class: "text-3xl font-bold", "Hotels" }
            Link {
                to: Route::CreateRoom {},
                class: "px-4 py-2 bg-indigo-600 text-white rounded-lg",
                "Add hotel"
            }
        }
        {body}
    }
}

#[component]
fn HotelRow(hotel: Hotel, on_delete: EventHandler<Hotel>) -> Element {
    let cover = hotel.cover_image().unwrap_or_default().to_string();
    let hotel_id = hotel.hotel_id;
    let rating = format!("{:.1}", hotel.ratings);
    let target = hotel.clone();

    rsx! {
        div { class: "bg-white rounded-xl shadow p-4 flex gap-4 items-center",
            if !cover.is_empty() {
                img { class: "w-32 h-24 object-cover rounded-lg", src: "{cover}" }
            }
            div { class: "flex-1",
                p { class: "font-semibold", "{hotel.title}" }
                p { class: "text-sm text-gray-600", "{hotel.city} · {hotel.subtitle}" }
                p { class: "text-sm", "{format_price(hotel.price)} / night · ★ {rating}" }
            }
            div { class: "flex gap-2",
                Link {
                    to: Route::EditRoom { hotel_id },
                    class: "px-3 py-1 border rounded-lg",
                    "Edit"
                }
                button {
                    class: "px-3 py-1 bg-red-600 text-white rounded-lg",
                    onclick: move |_| on_delete.call(target.clone()),
                    "Delete"
                }
            }
        }
    }
}
