use crate::models::HotelDraft;
use crate::ui::{use_api, Route};
use crate::validation::FieldErrors;
use dioxus::prelude::*;
use rfd::AsyncFileDialog;
use tracing::{error, info, warn};

use super::super::toast::use_toast;

const MAX_IMAGES: usize = 5;
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

#[component]
pub fn CreateRoom() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Add hotel" }
        RoomForm { initial: HotelDraft::default() }
    }
}

#[component]
pub fn EditRoom(hotel_id: ReadSignal<i64>) -> Element {
    let api = use_api();
    let hotel = use_resource(move || {
        let api = api.clone();
        let hotel_id = hotel_id();
        async move { api.get_hotel(hotel_id).await }
    });

    let body = match hotel.value().read().as_ref() {
        None => rsx! {
            p { class: "text-gray-500", "Loading hotel..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "text-red-600", "Could not load hotel: {e}" }
        },
        Some(Ok(hotel)) => rsx! {
            RoomForm { key: "{hotel.hotel_id}", initial: HotelDraft::from_hotel(hotel) }
        },
    };

    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Edit hotel" }
        {body}
    }
}

/// Shared create/edit form; `initial.hotel_id` decides which endpoint is used
#[component]
fn RoomForm(initial: HotelDraft) -> Element {
    let api = use_api();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut draft = use_signal(|| initial.clone());
    let mut price_text = use_signal(|| {
        if initial.price > 0.0 {
            initial.price.to_string()
        } else {
            String::new()
        }
    });
    let mut benefits_text = use_signal(|| initial.benefits_text());
    let mut errors = use_signal(FieldErrors::new);
    let mut is_uploading = use_signal(|| false);
    let mut is_saving = use_signal(|| false);

    let upload_api = api.clone();
    let pick_images = move |_| {
        let api = upload_api.clone();
        spawn(async move {
            let Some(files) = AsyncFileDialog::new()
                .set_title("Select hotel images")
                .add_filter("Images", &IMAGE_EXTENSIONS)
                .pick_files()
                .await
            else {
                return;
            };

            is_uploading.set(true);
            for file in files {
                if draft.peek().images.len() >= MAX_IMAGES {
                    toast.info(format!("At most {} images per hotel", MAX_IMAGES));
                    break;
                }
                match api.upload_image(file.path()).await {
                    Ok(uploaded) => {
                        info!("✓ Uploaded {}", uploaded.url);
                        draft.write().images.push(uploaded.url);
                    }
                    Err(e) => {
                        error!("✗ Image upload failed: {}", e);
                        toast.error(format!("Upload failed: {}", e));
                    }
                }
            }
            is_uploading.set(false);
        });
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut next = draft();
        next.price = price_text().trim().parse().unwrap_or(0.0);
        next.set_benefits_from_text(&benefits_text());

        let field_errors = next.validate();
        if !field_errors.is_empty() {
            if let Some(first) = field_errors.first() {
                toast.error(first.to_string());
            }
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let api = api.clone();
        spawn(async move {
            is_saving.set(true);
            let result = match next.hotel_id {
                Some(hotel_id) => api.update_hotel(hotel_id, &next).await,
                None => api.create_hotel(&next).await,
            };
            match result {
                Ok(saved) => {
                    info!("✓ Saved hotel {} ({})", saved.hotel_id, saved.title);
                    toast.success("Hotel saved");
                    navigator.push(Route::RoomManagement {});
                }
                Err(e) => {
                    warn!("✗ Saving hotel failed: {}", e);
                    toast.error(format!("Could not save hotel: {}", e));
                }
            }
            is_saving.set(false);
        });
    };

    let current = draft();
    let field_class = |name: &str| {
        if errors.read().has(name) {
            "w-full p-2 border border-red-500 rounded-md"
        } else {
            "w-full p-2 border border-gray-300 rounded-md"
        }
    };

    rsx! {
        form { class: "bg-white rounded-xl shadow p-6 space-y-4 max-w-3xl", onsubmit: submit,
            div {
                span { class: "text-sm text-gray-600", "Images ({current.images.len()}/{MAX_IMAGES})" }
                div { class: "flex flex-wrap gap-3 mt-2",
                    for (index, url) in current.images.iter().cloned().enumerate() {
                        div { key: "{url}", class: "relative",
                            img { class: "w-28 h-20 object-cover rounded-lg", src: "{url}" }
                            button {
                                class: "absolute top-1 right-1 bg-black/60 text-white rounded-full w-6 h-6 text-xs",
                                r#type: "button",
                                onclick: move |_| {
                                    draft.write().images.remove(index);
                                },
                                "✕"
                            }
                        }
                    }
                    if current.images.len() < MAX_IMAGES {
                        button {
                            class: "w-28 h-20 border-2 border-dashed rounded-lg text-gray-500 disabled:opacity-50",
                            r#type: "button",
                            disabled: is_uploading(),
                            onclick: pick_images,
                            if is_uploading() { "Uploading..." } else { "+ Add" }
                        }
                    }
                }
            }
            label { class: "block",
                span { class: "text-sm text-gray-600", "Hotel name" }
                input {
                    class: field_class("title"),
                    value: "{current.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
            }
            label { class: "block",
                span { class: "text-sm text-gray-600", "Short description" }
                textarea {
                    class: "w-full p-2 border border-gray-300 rounded-md",
                    rows: "2",
                    value: "{current.subtitle}",
                    oninput: move |evt| draft.write().subtitle = evt.value(),
                }
            }
            label { class: "block",
                span { class: "text-sm text-gray-600", "Amenities (comma separated)" }
                textarea {
                    class: "w-full p-2 border border-gray-300 rounded-md",
                    rows: "3",
                    placeholder: "Free WiFi, Pool, Breakfast",
                    value: "{benefits_text}",
                    oninput: move |evt| benefits_text.set(evt.value()),
                }
            }
            div { class: "grid grid-cols-2 gap-4",
                label { class: "block",
                    span { class: "text-sm text-gray-600", "Price per night (VND)" }
                    input {
                        class: field_class("price"),
                        r#type: "number",
                        min: "0",
                        value: "{price_text}",
                        oninput: move |evt| price_text.set(evt.value()),
                    }
                }
                label { class: "block",
                    span { class: "text-sm text-gray-600", "City" }
                    input {
                        class: field_class("city"),
                        value: "{current.city}",
                        oninput: move |evt| draft.write().city = evt.value(),
                    }
                }
            }
            div { class: "flex gap-3 justify-end",
                Link { to: Route::RoomManagement {}, class: "px-4 py-2 border rounded-lg", "Cancel" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_saving() || is_uploading(),
                    if is_saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
