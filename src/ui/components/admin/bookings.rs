use crate::booking::{BookingSort, BookingTabs, TabFilter};
use crate::format::format_price;
use crate::models::{Booking, PaymentStatus};
use crate::search::PageWindow;
use crate::ui::use_api;
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::dialog_context::{use_dialog, ConfirmRequest};
use super::super::hotels_search::PaginationBar;
use super::super::status_badge::StatusBadge;
use super::super::toast::use_toast;

/// Raw text of the filter inputs for the active tab
#[derive(Debug, Clone, Default, PartialEq)]
struct FilterInputs {
    customer: String,
    email: String,
    min_price: String,
    start: String,
    end: String,
}

impl FilterInputs {
    fn from_filter(filter: &TabFilter) -> Self {
        let (start, end) = filter
            .date_range
            .map(|(s, e)| (s.to_string(), e.to_string()))
            .unwrap_or_default();
        Self {
            customer: filter.customer.clone(),
            email: filter.email.clone(),
            min_price: filter.min_price.map(|p| p.to_string()).unwrap_or_default(),
            start,
            end,
        }
    }

    fn to_filter(&self) -> TabFilter {
        TabFilter::from_inputs(&self.customer, &self.email, &self.min_price, &self.start, &self.end)
    }
}

#[component]
pub fn AdminBookings() -> Element {
    let api = use_api();
    let toast = use_toast();
    let dialog = use_dialog();

    let mut tabs = use_signal(BookingTabs::default);
    let mut active = use_signal(|| PaymentStatus::Pending);
    let mut inputs = use_signal(FilterInputs::default);
    let reload = use_signal(|| 0u32);

    let loader_api = api.clone();
    let bookings = use_resource(move || {
        let api = loader_api.clone();
        let _ = reload();
        async move { api.list_bookings().await }
    });

    use_effect(move || {
        if let Some(Ok(list)) = bookings.value().read().as_ref() {
            info!("Loaded {} bookings", list.len());
            tabs.write().replace_bookings(list.clone());
        }
    });

    let mut apply_inputs = move |next: FilterInputs| {
        let filter = next.to_filter();
        inputs.set(next);
        if let Some(tab) = tabs.write().tab_mut(active()) {
            tab.set_filter(filter);
        }
    };

    let mut switch_tab = move |status: PaymentStatus| {
        active.set(status);
        let restored = tabs
            .read()
            .tab(status)
            .map(|t| FilterInputs::from_filter(t.filter()))
            .unwrap_or_default();
        inputs.set(restored);
    };

    let on_cancel = use_callback(move |booking_id: i64| {
        let api = api.clone();
        dialog.ask(
            ConfirmRequest::new(
                "Cancel booking",
                format!("Cancel booking #{}? The guest will be notified.", booking_id),
                move || {
                    let api = api.clone();
                    let mut reload = reload;
                    spawn(async move {
                        match api.cancel_booking(booking_id).await {
                            Ok(_) => {
                                info!("✓ Canceled booking {}", booking_id);
                                toast.success(format!("Booking #{} canceled", booking_id));
                                reload.set(reload() + 1);
                            }
                            Err(e) => {
                                warn!("✗ Cancel of booking {} failed: {}", booking_id, e);
                                toast.error(format!("Could not cancel booking: {}", e));
                            }
                        }
                    });
                },
            )
            .labels("Cancel booking", "Keep")
            .destructive(),
        );
    });

    if let Some(Err(e)) = bookings.value().read().as_ref() {
        return rsx! {
            h1 { class: "text-3xl font-bold mb-6", "Bookings" }
            p { class: "text-red-600", "Could not load bookings: {e}" }
        };
    }

    let status = active();
    let snapshot = tabs.read().clone();
    let Some(tab) = snapshot.tab(status) else {
        return rsx! {};
    };
    let rows: Vec<Booking> = tab.page_rows().into_iter().cloned().collect();
    let window = PageWindow::new(tab.page() as u32, tab.total_pages() as u32);
    let current_sort = tab.sort();
    let current = inputs();
    let is_loading = bookings.value().read().is_none();
    let tab_buttons: Vec<(PaymentStatus, usize)> =
        snapshot.tabs().iter().map(|t| (t.status, t.len())).collect();

    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Bookings" }
        div { class: "flex gap-2 mb-6",
            for (target, count) in tab_buttons {
                button {
                    key: "{target}",
                    class: if target == status { "px-4 py-2 rounded-lg bg-indigo-600 text-white" } else { "px-4 py-2 rounded-lg bg-white border" },
                    onclick: move |_| switch_tab(target),
                    "{target.label()} ({count})"
                }
            }
        }
        div { class: "grid grid-cols-6 gap-3 mb-4",
            input {
                class: "p-2 border rounded-md",
                placeholder: "Customer",
                value: "{current.customer}",
                oninput: {
                    let current = current.clone();
                    move |evt: FormEvent| {
                        apply_inputs(FilterInputs { customer: evt.value(), ..current.clone() })
                    }
                },
            }
            input {
                class: "p-2 border rounded-md",
                placeholder: "Email",
                value: "{current.email}",
                oninput: {
                    let current = current.clone();
                    move |evt: FormEvent| {
                        apply_inputs(FilterInputs { email: evt.value(), ..current.clone() })
                    }
                },
            }
            input {
                class: "p-2 border rounded-md",
                r#type: "number",
                placeholder: "Min. amount",
                value: "{current.min_price}",
                oninput: {
                    let current = current.clone();
                    move |evt: FormEvent| {
                        apply_inputs(FilterInputs { min_price: evt.value(), ..current.clone() })
                    }
                },
            }
            input {
                class: "p-2 border rounded-md",
                r#type: "date",
                value: "{current.start}",
                oninput: {
                    let current = current.clone();
                    move |evt: FormEvent| {
                        apply_inputs(FilterInputs { start: evt.value(), ..current.clone() })
                    }
                },
            }
            input {
                class: "p-2 border rounded-md",
                r#type: "date",
                value: "{current.end}",
                oninput: {
                    let current = current.clone();
                    move |evt: FormEvent| {
                        apply_inputs(FilterInputs { end: evt.value(), ..current.clone() })
                    }
                },
            }
            select {
                class: "p-2 border rounded-md",
                value: "{current_sort.value()}",
                onchange: move |evt: FormEvent| {
                    let sort = BookingSort::from_value(&evt.value());
                    if let Some(tab) = tabs.write().tab_mut(active()) {
                        tab.set_sort(sort);
                    }
                },
                for sort in BookingSort::ALL {
                    option {
                        key: "{sort.value()}",
                        value: "{sort.value()}",
                        selected: sort == current_sort,
                        "{sort.label()}"
                    }
                }
            }
        }
        if is_loading {
            p { class: "text-gray-500", "Loading bookings..." }
        } else if rows.is_empty() {
            p { class: "text-gray-500 py-8 text-center", "No bookings match these filters" }
        } else {
            table { class: "w-full bg-white rounded-xl shadow text-left",
                thead {
                    tr { class: "border-b text-sm text-gray-500",
                        th { class: "p-3", "#" }
                        th { class: "p-3", "Guest" }
                        th { class: "p-3", "Hotel" }
                        th { class: "p-3", "Stay" }
                        th { class: "p-3", "Amount" }
                        th { class: "p-3", "Status" }
                        th { class: "p-3" }
                    }
                }
                tbody {
                    for booking in rows {
                        BookingRow {
                            key: "{booking.booking_id}",
                            booking,
                            on_cancel,
                        }
                    }
                }
            }
        }
        PaginationBar {
            window,
            on_change: move |page: u32| {
                if let Some(tab) = tabs.write().tab_mut(active()) {
                    tab.change_page(page as usize);
                }
            },
        }
    }
}

#[component]
fn BookingRow(booking: Booking, on_cancel: EventHandler<i64>) -> Element {
    let stay = match (booking.check_in_date, booking.check_out_date) {
        (Some(check_in), Some(check_out)) => format!("{} → {}", check_in, check_out),
        _ => "-".to_string(),
    };
    let email = booking.guest_email.clone().unwrap_or_default();
    let booking_id = booking.booking_id;

    rsx! {
        tr { class: "border-b last:border-0",
            td { class: "p-3", "{booking_id}" }
            td { class: "p-3",
                p { "{booking.display_guest_name()}" }
                p { class: "text-xs text-gray-500", "{email}" }
            }
            td { class: "p-3", "{booking.display_hotel_name()}" }
            td { class: "p-3 text-sm", "{stay}" }
            td { class: "p-3", "{format_price(booking.amount())}" }
            td { class: "p-3",
                StatusBadge { status: booking.payment_status }
            }
            td { class: "p-3",
                if booking.payment_status != PaymentStatus::Canceled {
                    button {
                        class: "text-sm text-red-600 hover:underline",
                        onclick: move |_| on_cancel.call(booking_id),
                        "Cancel"
                    }
                }
            }
        }
    }
}
