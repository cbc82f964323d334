mod form_input;
mod login;
mod password_recovery;
mod profile;
mod register;

pub use form_input::FormInput;
pub use login::Login;
pub use password_recovery::{ForgotPassword, ResetPassword, VerifyOtp};
pub use profile::Profile;
pub use register::Register;
