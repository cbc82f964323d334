use crate::validation::{is_present, FieldErrors};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A hotel as returned by the listing, search, filter and detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(alias = "id")]
    pub hotel_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Price per night in VND
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Star rating, 0.0 when the hotel has not been rated
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Hotel {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Payload for creating or updating a hotel from the admin pages
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<i64>,
    pub title: String,
    pub subtitle: String,
    pub images: Vec<String>,
    pub benefits: Vec<String>,
    pub price: f64,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<f64>,
}

impl HotelDraft {
    /// Start an edit from an existing hotel, keeping its ratings untouched
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            hotel_id: Some(hotel.hotel_id),
            title: hotel.title.clone(),
            subtitle: hotel.subtitle.clone(),
            images: hotel.images.clone(),
            benefits: hotel.benefits.clone(),
            price: hotel.price,
            city: hotel.city.clone(),
            ratings: Some(hotel.ratings),
        }
    }

    /// Benefits are edited as a single comma separated text field
    pub fn set_benefits_from_text(&mut self, text: &str) {
        self.benefits = text
            .split(',')
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();
    }

    pub fn benefits_text(&self) -> String {
        self.benefits.join(", ")
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("title", is_present(&self.title), "Hotel name is required");
        errors.check("city", is_present(&self.city), "City is required");
        errors.check(
            "price",
            self.price.is_finite() && self.price > 0.0,
            "Price must be greater than zero",
        );
        errors
    }
}

// Wire values (keep in sync with as_str())
const STATUS_PENDING: &str = "PENDING";
const STATUS_PAID: &str = "PAID";
const STATUS_CANCELED: &str = "CANCELED";

/// Payment status of a booking
///
/// The backend also emits the legacy values `WAITING_PAYMENT` and
/// `CONFIRMED`; both are still waiting for payment and map to `Pending`.
/// Anything unrecognised is treated as `Pending` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Canceled,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => STATUS_PENDING,
            PaymentStatus::Paid => STATUS_PAID,
            PaymentStatus::Canceled => STATUS_CANCELED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Awaiting payment",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Canceled => "Canceled",
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            STATUS_PAID => PaymentStatus::Paid,
            STATUS_CANCELED | "CANCELLED" => PaymentStatus::Canceled,
            _ => PaymentStatus::Pending,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        PaymentStatus::from(value.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking as listed by the admin and user-profile endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "id")]
    pub booking_id: i64,
    #[serde(default)]
    pub hotel_id: Option<i64>,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub guest_full_name: Option<String>,
    #[serde(default)]
    pub guest_email: Option<String>,
    #[serde(default)]
    pub guest_phone_number: Option<String>,
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub number_of_rooms: Option<u32>,
    #[serde(default)]
    pub number_of_guests: Option<u32>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

impl Booking {
    pub fn display_hotel_name(&self) -> String {
        match (&self.hotel_name, self.hotel_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("Hotel ID: {}", id),
            _ => "Unknown hotel".to_string(),
        }
    }

    pub fn display_guest_name(&self) -> &str {
        self.guest_full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Guest")
    }

    pub fn amount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }
}

/// Body of `POST api/bookings/create`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_full_name: String,
    pub number_of_guests: u32,
    pub number_of_rooms: u32,
    pub room_type: String,
    pub hotel_id: i64,
    pub status: PaymentStatus,
}

/// Reply of `POST api/bookings/create`
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    #[serde(default, alias = "id")]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub confirmation_code: Option<String>,
}

/// A guest review of a hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub reviewer_name: String,
    /// 1..=5
    pub rating: u8,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub stay_date: String,
    #[serde(default)]
    pub verified: bool,
}

/// Aggregates shown above the review list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewSummary {
    pub average_rating: f64,
    pub total_reviews: usize,
    /// Count per star value, always holding the keys 1..=5
    pub star_counts: BTreeMap<u8, usize>,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut star_counts: BTreeMap<u8, usize> = (1..=5).map(|star| (star, 0)).collect();
        let mut total = 0u32;
        for review in reviews {
            if let Some(count) = star_counts.get_mut(&review.rating) {
                *count += 1;
            }
            total += review.rating as u32;
        }

        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            (total as f64 / reviews.len() as f64 * 10.0).round() / 10.0
        };

        Self {
            average_rating,
            total_reviews: reviews.len(),
            star_counts,
        }
    }
}

/// Profile fields stored alongside the auth token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "id")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// First and last name joined, skipping the empty parts
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .map(|r| r.eq_ignore_ascii_case("admin") || r.eq_ignore_ascii_case("role_admin"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_draft_validation() {
        let mut draft = HotelDraft::default();
        let errors = draft.validate();
        assert!(errors.has("title"));
        assert!(errors.has("city"));
        assert!(errors.has("price"));

        draft.title = "Sunrise".to_string();
        draft.city = "Hanoi".to_string();
        draft.price = 900_000.0;
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_payment_status_maps_legacy_values() {
        assert_eq!(PaymentStatus::from("PAID"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from("CANCELED"), PaymentStatus::Canceled);
        assert_eq!(PaymentStatus::from("WAITING_PAYMENT"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from("CONFIRMED"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from("something"), PaymentStatus::Pending);
    }

    #[test]
    fn test_booking_deserializes_backend_shape() {
        let json = r#"{
            "bookingId": 12,
            "hotelId": 3,
            "guestFullName": "Nguyen Van A",
            "checkInDate": "2025-03-01",
            "checkOutDate": "2025-03-04",
            "numberOfRooms": 2,
            "totalAmount": 1500000,
            "paymentStatus": "WAITING_PAYMENT"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.booking_id, 12);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(
            booking.check_in_date,
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(booking.display_hotel_name(), "Hotel ID: 3");
        assert_eq!(booking.amount(), 1_500_000.0);
    }

    #[test]
    fn test_hotel_accepts_id_alias() {
        let hotel: Hotel =
            serde_json::from_str(r#"{"id": 7, "title": "Sea View", "price": 900000}"#).unwrap();
        assert_eq!(hotel.hotel_id, 7);
        assert_eq!(hotel.ratings, 0.0);
        assert!(hotel.cover_image().is_none());
    }

    #[test]
    fn test_review_summary() {
        let reviews = vec![
            Review {
                rating: 5,
                ..Default::default()
            },
            Review {
                rating: 4,
                ..Default::default()
            },
            Review {
                rating: 4,
                ..Default::default()
            },
        ];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.total_reviews, 3);
        assert_eq!(summary.average_rating, 4.3);
        assert_eq!(summary.star_counts[&4], 2);
        assert_eq!(summary.star_counts[&1], 0);
        assert_eq!(summary.star_counts.len(), 5);
    }

    #[test]
    fn test_user_full_name() {
        let user = UserProfile {
            first_name: "Lan".to_string(),
            last_name: String::new(),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Lan");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_hotel_draft_benefits_text() {
        let mut draft = HotelDraft::from_hotel(&Hotel::default());
        draft.set_benefits_from_text("Pool, Spa , ,Gym");
        assert_eq!(draft.benefits, vec!["Pool", "Spa", "Gym"]);
        assert_eq!(draft.benefits_text(), "Pool, Spa, Gym");
    }
}
