use crate::models::PaymentStatus;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(status: PaymentStatus) -> Element {
    let color = match status {
        PaymentStatus::Paid => "bg-green-100 text-green-700",
        PaymentStatus::Pending => "bg-yellow-100 text-yellow-700",
        PaymentStatus::Canceled => "bg-red-100 text-red-700",
    };

    rsx! {
        span { class: "px-3 py-1 rounded-full text-sm font-medium {color}", "{status.label()}" }
    }
}
