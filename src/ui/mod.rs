pub mod app;
pub mod app_context;
pub mod components;

pub use app::*;
pub use app_context::{use_api, use_auth_service, AppContext};
pub use components::*;

// Re-export constants from app module
pub use app::{MAIN_CSS, TAILWIND_CSS};
