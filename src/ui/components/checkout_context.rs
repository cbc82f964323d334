use crate::booking::PriceQuote;
use crate::models::{BookingRequest, Hotel};
use dioxus::prelude::*;

/// A booking created on the details page, waiting for payment
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCheckout {
    pub booking_id: Option<i64>,
    pub confirmation_code: Option<String>,
    pub hotel: Hotel,
    pub request: BookingRequest,
    pub quote: PriceQuote,
}

#[derive(Clone, Copy)]
pub struct CheckoutState {
    pub pending: Signal<Option<PendingCheckout>>,
}

#[component]
pub fn CheckoutStateProvider(children: Element) -> Element {
    let pending = use_signal(|| None::<PendingCheckout>);
    use_context_provider(|| CheckoutState { pending });

    rsx! {
        {children}
    }
}

pub fn use_checkout() -> Signal<Option<PendingCheckout>> {
    use_context::<CheckoutState>().pending
}
