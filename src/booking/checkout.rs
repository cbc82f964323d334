use crate::api::PaymentRequest;
use crate::validation::{
    is_present, is_valid_card_number, is_valid_cvc, is_valid_email, is_valid_expiry,
    is_valid_postal_code, FieldErrors,
};

pub const CURRENCY: &str = "VND";

/// The card and billing form on the checkout page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub email: String,
    pub name_on_card: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl PaymentForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("email", is_valid_email(&self.email), "Enter a valid email address");
        errors.check("nameOnCard", is_present(&self.name_on_card), "Name on card is required");
        errors.check(
            "cardNumber",
            is_valid_card_number(&self.card_number),
            "Card number must be 16 digits",
        );
        errors.check("expiry", is_valid_expiry(&self.expiry), "Expiry must be MM/YY");
        errors.check("cvc", is_valid_cvc(&self.cvc), "CVC must be 3 or 4 digits");
        errors.check("address", is_present(&self.address), "Address is required");
        errors.check("city", is_present(&self.city), "City is required");
        errors.check("state", is_present(&self.state), "State is required");
        errors.check(
            "postalCode",
            is_valid_postal_code(&self.postal_code),
            "Postal code must be 5 or 6 digits",
        );
        errors
    }

    /// Payment body for `booking_id`, or the field errors blocking it
    pub fn to_request(
        &self,
        booking_id: Option<i64>,
        amount: f64,
    ) -> Result<PaymentRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PaymentRequest {
            email: self.email.trim().to_string(),
            name_on_card: self.name_on_card.trim().to_string(),
            card_number: self.card_number.chars().filter(|c| !c.is_whitespace()).collect(),
            expiry: self.expiry.trim().to_string(),
            cvc: self.cvc.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            booking_id,
            amount,
            currency: CURRENCY.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaymentForm {
        PaymentForm {
            email: "guest@example.com".to_string(),
            name_on_card: "Lan Nguyen".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiry: "09/27".to_string(),
            cvc: "123".to_string(),
            address: "1 Trang Tien".to_string(),
            city: "Hanoi".to_string(),
            state: "HN".to_string(),
            postal_code: "100000".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = PaymentForm::default().validate();
        for field in [
            "email",
            "nameOnCard",
            "cardNumber",
            "expiry",
            "cvc",
            "address",
            "city",
            "state",
            "postalCode",
        ] {
            assert!(errors.has(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_request_carries_booking_and_currency() {
        let request = filled().to_request(Some(42), 6_480_000.0).unwrap();
        assert_eq!(request.card_number, "4111111111111111");
        assert_eq!(request.booking_id, Some(42));
        assert_eq!(request.currency, "VND");
    }

    #[test]
    fn test_bad_expiry_blocks_request() {
        let mut form = filled();
        form.expiry = "13/27".to_string();
        let errors = form.to_request(None, 1.0).unwrap_err();
        assert_eq!(errors.get("expiry"), Some("Expiry must be MM/YY"));
    }
}
