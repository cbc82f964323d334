use crate::models::{BookingRequest, PaymentStatus, UserProfile};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

pub const TAX_RATE: f64 = 0.08;
pub const MAX_GUESTS: u32 = 10;
pub const MAX_ROOMS: u32 = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Please choose check-in and check-out dates")]
    MissingDates,
    #[error("Check-out must be after check-in")]
    InvalidDates,
    #[error("No guest name found, please log in again")]
    MissingGuest,
    #[error("{0}")]
    OutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoomType {
    #[default]
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Suite => "Suite",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calendar nights between two dates, at least 1
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    days.max(1) as u32
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Price breakdown shown on the booking card and carried to checkout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub price_per_night: f64,
    pub rooms: u32,
    pub nights: u32,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl PriceQuote {
    pub fn compute(price_per_night: f64, rooms: u32, nights: u32) -> Self {
        let nights = nights.max(1);
        let subtotal = price_per_night * rooms as f64 * nights as f64;
        let tax = round_cents(subtotal * TAX_RATE);

        Self {
            price_per_night,
            rooms,
            nights,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Selections on the hotel details booking card
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub hotel_id: i64,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub rooms: u32,
    pub room_type: RoomType,
}

impl BookingForm {
    pub fn new(hotel_id: i64) -> Self {
        Self {
            hotel_id,
            check_in: None,
            check_out: None,
            guests: 2,
            rooms: 1,
            room_type: RoomType::Standard,
        }
    }

    pub fn nights(&self) -> u32 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => nights_between(check_in, check_out),
            _ => 1,
        }
    }

    pub fn quote(&self, price_per_night: f64) -> PriceQuote {
        PriceQuote::compute(price_per_night, self.rooms, self.nights())
    }

    /// Build the create-booking body for the logged-in `user`
    pub fn to_request(&self, user: Option<&UserProfile>) -> Result<BookingRequest, BookingError> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(BookingError::MissingDates);
        };
        if check_out <= check_in {
            return Err(BookingError::InvalidDates);
        }
        if !(1..=MAX_GUESTS).contains(&self.guests) {
            return Err(BookingError::OutOfRange(format!(
                "Guests must be between 1 and {}",
                MAX_GUESTS
            )));
        }
        if !(1..=MAX_ROOMS).contains(&self.rooms) {
            return Err(BookingError::OutOfRange(format!(
                "Rooms must be between 1 and {}",
                MAX_ROOMS
            )));
        }

        let guest_full_name = user
            .map(UserProfile::full_name)
            .filter(|name| !name.is_empty())
            .ok_or(BookingError::MissingGuest)?;

        Ok(BookingRequest {
            check_in_date: check_in,
            check_out_date: check_out,
            guest_full_name,
            number_of_guests: self.guests,
            number_of_rooms: self.rooms,
            room_type: self.room_type.label().to_string(),
            hotel_id: self.hotel_id,
            status: PaymentStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quote() {
        let quote = PriceQuote::compute(1_000_000.0, 2, 3);
        assert_eq!(quote.subtotal, 6_000_000.0);
        assert_eq!(quote.tax, 480_000.0);
        assert_eq!(quote.total, 6_480_000.0);

        let quote = PriceQuote::compute(123.45, 1, 1);
        assert_eq!(quote.tax, 9.88);
    }

    #[test]
    fn test_nights_minimum_one() {
        assert_eq!(nights_between(date(2025, 3, 1), date(2025, 3, 4)), 3);
        assert_eq!(nights_between(date(2025, 3, 1), date(2025, 3, 1)), 1);
        assert_eq!(PriceQuote::compute(100.0, 1, 0).nights, 1);
    }

    #[test]
    fn test_to_request() {
        let user = UserProfile {
            first_name: "Lan".to_string(),
            last_name: "Nguyen".to_string(),
            ..Default::default()
        };
        let mut form = BookingForm::new(7);
        assert_eq!(form.to_request(Some(&user)), Err(BookingError::MissingDates));

        form.check_in = Some(date(2025, 6, 10));
        form.check_out = Some(date(2025, 6, 10));
        assert_eq!(form.to_request(Some(&user)), Err(BookingError::InvalidDates));

        form.check_out = Some(date(2025, 6, 12));
        form.room_type = RoomType::Suite;
        let request = form.to_request(Some(&user)).unwrap();
        assert_eq!(request.guest_full_name, "Lan Nguyen");
        assert_eq!(request.room_type, "Suite");
        assert_eq!(request.status, PaymentStatus::Pending);
        assert_eq!(form.nights(), 2);

        assert_eq!(form.to_request(None), Err(BookingError::MissingGuest));

        form.rooms = 6;
        assert!(matches!(
            form.to_request(Some(&user)),
            Err(BookingError::OutOfRange(_))
        ));
    }
}
