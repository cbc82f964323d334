pub mod service;
pub mod session;
pub mod token;

pub use service::{AuthError, AuthService};
pub use session::{
    open_session_store, KeyringSessionStore, MemorySessionStore, SessionError, SessionKey,
    SessionStore, SharedSessionStore,
};
pub use token::{is_token_expired, token_expiry};
