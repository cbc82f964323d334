pub mod admin;
pub mod checkout;
pub mod pricing;

pub use admin::{BookingSort, BookingTab, BookingTabs, DashboardSummary, TabFilter, ADMIN_PAGE_SIZE};
pub use checkout::{PaymentForm, CURRENCY};
pub use pricing::{nights_between, BookingError, BookingForm, PriceQuote, RoomType, MAX_GUESTS, MAX_ROOMS, TAX_RATE};
