// Library exports for integration tests and the desktop binary

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod format;
pub mod models;
pub mod search;
pub mod validation;

// UI layer (hidden from docs)
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;
