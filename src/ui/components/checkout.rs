use crate::booking::PaymentForm;
use crate::format::format_price;
use crate::ui::{use_api, Route};
use crate::validation::FieldErrors;
use dioxus::prelude::*;
use tracing::{info, warn};

use super::auth_context::use_auth;
use super::checkout_context::use_checkout;
use super::toast::use_toast;

/// Payment page for the booking created on the details page
#[component]
pub fn Checkout() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();
    let pending = use_checkout();

    let mut form = use_signal(|| PaymentForm {
        email: auth
            .user
            .peek()
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default(),
        ..Default::default()
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut is_paying = use_signal(|| false);

    let Some(checkout) = pending.read().clone() else {
        return rsx! {
            div { class: "container mx-auto p-12 text-center",
                p { class: "text-gray-600 mb-4", "There is no booking waiting for payment." }
                Link {
                    to: Route::HotelsSearch {
                        query: Default::default(),
                    },
                    class: "text-indigo-600 underline",
                    "Find a hotel"
                }
            }
        };
    };

    let on_pay = {
        let checkout = checkout.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let request = match form.peek().to_request(checkout.booking_id, checkout.quote.total) {
                Ok(request) => request,
                Err(field_errors) => {
                    if let Some(first) = field_errors.first() {
                        toast.error(first.to_string());
                    }
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::new());

            let api = api.clone();
            let booking_id = checkout.booking_id;
            spawn(async move {
                is_paying.set(true);
                match api.confirm_payment(&request).await {
                    Ok(_) => {
                        info!("✓ Payment confirmed for booking {:?}", booking_id);
                        navigator.push(Route::BookingSuccess {
                            booking_id: booking_id.unwrap_or_default(),
                        });
                    }
                    Err(e) => {
                        warn!("✗ Payment failed: {}", e);
                        toast.error(format!("Payment failed: {}", e));
                        navigator.push(Route::BookingFailed {});
                    }
                }
                is_paying.set(false);
            });
        }
    };

    let field = move |name: &'static str, label: &'static str, placeholder: &'static str| {
        let value = field_value(&form.read(), name);
        let error = errors.read().get(name).map(str::to_string);
        rsx! {
            label { class: "block",
                span { class: "text-sm text-gray-600", "{label}" }
                input {
                    class: if error.is_some() { "w-full p-2 border rounded-md border-red-500" } else { "w-full p-2 border rounded-md border-gray-300" },
                    placeholder,
                    value: "{value}",
                    oninput: move |evt| set_field_value(&mut form.write(), name, evt.value()),
                }
                if let Some(message) = &error {
                    span { class: "text-xs text-red-600", "{message}" }
                }
            }
        }
    };

    rsx! {
        div { class: "container mx-auto px-6 py-8 grid grid-cols-1 lg:grid-cols-3 gap-8",
            form { class: "lg:col-span-2 bg-white rounded-xl shadow p-6 space-y-4", onsubmit: on_pay,
                h1 { class: "text-2xl font-bold", "Payment" }
                {field("email", "Email", "you@example.com")}
                {field("nameOnCard", "Name on card", "As printed on the card")}
                {field("cardNumber", "Card number", "0000 0000 0000 0000")}
                div { class: "grid grid-cols-2 gap-4",
                    {field("expiry", "Expiry", "MM/YY")}
                    {field("cvc", "CVC", "123")}
                }
                {field("address", "Address", "Street and number")}
                div { class: "grid grid-cols-2 gap-4",
                    {field("city", "City", "")}
                    {field("state", "State / Province", "")}
                }
                {field("postalCode", "Postal code", "100000")}
                button {
                    class: "w-full bg-indigo-600 text-white py-3 rounded-lg hover:bg-indigo-700 disabled:opacity-50",
                    r#type: "submit",
                    disabled: is_paying(),
                    if is_paying() { "Processing payment..." } else { "Pay {format_price(checkout.quote.total)}" }
                }
            }
            aside { class: "bg-white rounded-xl shadow p-6 space-y-2 h-fit",
                h2 { class: "text-xl font-semibold", "{checkout.hotel.title}" }
                p { class: "text-sm text-gray-500", "{checkout.hotel.city}" }
                p { "{checkout.request.check_in_date} → {checkout.request.check_out_date}" }
                p { "{checkout.request.room_type}, {checkout.request.number_of_rooms} room(s), {checkout.request.number_of_guests} guest(s)" }
                if let Some(code) = checkout.confirmation_code.as_ref() {
                    p { class: "text-sm text-gray-500", "Confirmation code: {code}" }
                }
                div { class: "border-t border-gray-100 pt-2 text-sm",
                    p { "Subtotal: {format_price(checkout.quote.subtotal)}" }
                    p { "Taxes: {format_price(checkout.quote.tax)}" }
                    p { class: "font-bold text-base", "Total: {format_price(checkout.quote.total)}" }
                }
            }
        }
    }
}

fn field_value(form: &PaymentForm, name: &str) -> String {
    match name {
        "email" => form.email.clone(),
        "nameOnCard" => form.name_on_card.clone(),
        "cardNumber" => form.card_number.clone(),
        "expiry" => form.expiry.clone(),
        "cvc" => form.cvc.clone(),
        "address" => form.address.clone(),
        "city" => form.city.clone(),
        "state" => form.state.clone(),
        "postalCode" => form.postal_code.clone(),
        _ => String::new(),
    }
}

fn set_field_value(form: &mut PaymentForm, name: &str, value: String) {
    match name {
        "email" => form.email = value,
        "nameOnCard" => form.name_on_card = value,
        "cardNumber" => form.card_number = value,
        "expiry" => form.expiry = value,
        "cvc" => form.cvc = value,
        "address" => form.address = value,
        "city" => form.city = value,
        "state" => form.state = value,
        "postalCode" => form.postal_code = value,
        _ => {}
    }
}
