use crate::booking::DashboardSummary;
use crate::format::format_price;
use crate::models::Booking;
use crate::ui::use_api;
use dioxus::prelude::*;
use tracing::debug;

use super::super::status_badge::StatusBadge;

const RECENT_BOOKINGS: usize = 5;

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let data = use_resource(move || {
        let api = api.clone();
        async move { futures::try_join!(api.list_bookings(), api.list_hotels()) }
    });

    let body = match data.value().read().as_ref() {
        None => rsx! {
            p { class: "text-gray-500", "Loading dashboard..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "text-red-600", "Could not load dashboard: {e}" }
        },
        Some(Ok((bookings, hotels))) => {
            let summary = DashboardSummary::compute(bookings, hotels);
            debug!("Dashboard: {:?}", summary);
            let mut recent: Vec<Booking> = bookings.clone();
            recent.sort_by(|a, b| b.booking_id.cmp(&a.booking_id));
            recent.truncate(RECENT_BOOKINGS);

            rsx! {
                div { class: "grid grid-cols-4 gap-6 mb-8",
                    SummaryCard { label: "Bookings", value: summary.total_bookings.to_string(), accent: "border-blue-500" }
                    SummaryCard { label: "Revenue", value: format_price(summary.total_revenue), accent: "border-green-500" }
                    SummaryCard { label: "Hotels", value: summary.total_hotels.to_string(), accent: "border-purple-500" }
                    SummaryCard { label: "Average rating", value: format!("{:.1}", summary.average_rating), accent: "border-yellow-500" }
                }
                div { class: "bg-white rounded-xl shadow p-6 mb-8",
                    h2 { class: "font-semibold mb-2", "Payment success rate" }
                    div { class: "w-full bg-gray-200 rounded-full h-4",
                        div {
                            class: "bg-green-500 h-4 rounded-full",
                            style: "width: {summary.success_rate}%",
                        }
                    }
                    p { class: "text-sm text-gray-600 mt-2", "{summary.success_rate}% of bookings are paid" }
                }
                div { class: "bg-white rounded-xl shadow p-6",
                    h2 { class: "font-semibold mb-4", "Latest bookings" }
                    for booking in recent {
                        div {
                            key: "{booking.booking_id}",
                            class: "flex justify-between items-center py-2 border-b last:border-0",
                            span { "#{booking.booking_id} · {booking.display_guest_name()} · {booking.display_hotel_name()}" }
                            div { class: "flex items-center gap-4",
                                span { "{format_price(booking.amount())}" }
                                StatusBadge { status: booking.payment_status }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Dashboard" }
        {body}
    }
}

#[component]
fn SummaryCard(label: String, value: String, accent: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl shadow p-6 border-l-4 {accent}",
            p { class: "text-sm text-gray-500", "{label}" }
            p { class: "text-2xl font-bold", "{value}" }
        }
    }
}
