use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use dioxus::router::FromQuery;
use std::fmt;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/hotels?:..query")]
        HotelsSearch { query: SearchQuery },
        #[route("/hotel/:hotel_id")]
        HotelDetails { hotel_id: i64 },
        #[route("/checkout")]
        Checkout {},
        #[route("/booking/confirmed/:booking_id")]
        BookingSuccess { booking_id: i64 },
        #[route("/booking/failed")]
        BookingFailed {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/verify-otp?:email")]
        VerifyOtp { email: String },
        #[route("/reset-password?:email&:otp")]
        ResetPassword { email: String, otp: String },
        #[route("/profile")]
        Profile {},
        #[nest("/admin")]
            #[layout(AdminLayout)]
                #[route("/")]
                AdminDashboard {},
                #[route("/bookings")]
                AdminBookings {},
                #[route("/rooms")]
                RoomManagement {},
                #[route("/rooms/new")]
                CreateRoom {},
                #[route("/rooms/:hotel_id/edit")]
                EditRoom { hotel_id: i64 },
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Raw query string of the hotel search route
///
/// Parsing into filter state happens in the search controller, so keys it
/// does not know about ride along untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromQuery for SearchQuery {
    fn from_query(query: &str) -> Self {
        SearchQuery(query.trim_start_matches('?').to_string())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("hotelhub")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 860))
}
