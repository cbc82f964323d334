pub mod account;
pub mod admin;
pub mod app;
pub mod auth_context;
pub mod booking_result;
pub mod checkout;
pub mod checkout_context;
pub mod dialog;
pub mod dialog_context;
pub mod home;
pub mod hotel_details;
pub mod hotels_search;
pub mod navbar;
pub mod rating;
pub mod search_box;
pub mod status_badge;
pub mod toast;

pub use account::{ForgotPassword, Login, Profile, Register, ResetPassword, VerifyOtp};
pub use admin::{AdminBookings, AdminDashboard, AdminLayout, CreateRoom, EditRoom, RoomManagement};
pub use app::App;
pub use auth_context::{use_auth, AuthState};
pub use booking_result::{BookingFailed, BookingSuccess};
pub use checkout::Checkout;
pub use home::Home;
pub use hotel_details::HotelDetails;
pub use hotels_search::HotelsSearch;
pub use navbar::{Navbar, NotFound};
