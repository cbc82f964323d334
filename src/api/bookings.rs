use super::client::{ApiClient, ApiError};
use crate::models::{Booking, BookingCreated, BookingRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Body of `POST api/payments/confirmation`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub email: String,
    pub name_on_card: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub booking_id: Option<i64>,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct PaymentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<BookingCreated, ApiError> {
        if request.check_out_date <= request.check_in_date {
            return Err(ApiError::InvalidInput(
                "Check-out must be after check-in".to_string(),
            ));
        }

        info!(
            "Creating booking for hotel {} ({} → {})",
            request.hotel_id, request.check_in_date, request.check_out_date
        );
        self.post("api/bookings/create", request).await
    }

    /// Every booking, for the admin pages
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("api/bookings", &[]).await
    }

    pub async fn user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get(&format!("api/bookings/user/{}", user_id), &[])
            .await
    }

    pub async fn cancel_booking(&self, booking_id: i64) -> Result<Value, ApiError> {
        info!("Canceling booking {}", booking_id);
        self.delete(&format!("api/bookings/cancel/{}", booking_id))
            .await
    }

    pub async fn confirm_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse, ApiError> {
        let response: PaymentResponse = self.post("api/payments/confirmation", request).await?;
        if !response.success {
            return Err(ApiError::Backend(
                response
                    .message
                    .unwrap_or_else(|| "Payment failed, please try again".to_string()),
            ));
        }
        Ok(response)
    }
}
