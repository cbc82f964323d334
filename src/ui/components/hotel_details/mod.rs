mod booking_card;
mod page;
mod reviews;

pub use page::HotelDetails;
