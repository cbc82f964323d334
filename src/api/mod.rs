pub mod auth;
pub mod bookings;
pub mod client;
pub mod hotels;

pub use bookings::{PaymentRequest, PaymentResponse};
pub use client::{ApiClient, ApiError, UploadedImage};
pub use hotels::{HotelListResponse, HotelListing, HotelPage, ListingRequest};
