use super::session::{stored_token, stored_user, store_user, SessionError, SessionKey, SharedSessionStore};
use super::token::is_token_expired;
use crate::api::auth::{
    AuthMessage, LoginRequest, OtpVerification, PasswordChange, PasswordReset, ProfileUpdate,
    RegisterRequest,
};
use crate::api::{ApiClient, ApiError};
use crate::models::UserProfile;
use crate::validation::{is_present, is_valid_email, is_valid_otp};
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
}

/// Login, registration and account recovery over the auth endpoints
///
/// Holds no state of its own: the session store is the single source of
/// truth, read fresh by every call.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: SharedSessionStore,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        let session = api.session().clone();
        Self { api, session }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Log in, store the token, then fetch and store the profile
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::Validation("Please enter a valid email".to_string()));
        }
        if !is_present(password) {
            return Err(AuthError::Validation("Please enter your password".to_string()));
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(ApiError::Unauthorized) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::InvalidCredentials)?;
        self.session.set(SessionKey::AuthToken, &token)?;

        let user = self.api.me(&token).await?;
        store_user(self.session.as_ref(), &user)?;

        info!("Logged in as {}", user.email);
        Ok(user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthMessage, AuthError> {
        if !is_valid_email(&request.email) {
            return Err(AuthError::Validation("Please enter a valid email".to_string()));
        }
        if !is_present(&request.first_name) || !is_present(&request.last_name) {
            return Err(AuthError::Validation("Please enter your full name".to_string()));
        }
        if request.password.len() < 6 {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        if request.password != request.confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }

        Ok(self.api.register(request).await?)
    }

    /// Clear the stored token and profile
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.remove(SessionKey::User)?;
        self.session.remove(SessionKey::AuthToken)?;
        info!("Logged out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        stored_user(self.session.as_ref())
    }

    /// A stored, unexpired token plus a stored profile
    pub fn is_logged_in(&self) -> bool {
        let Some(token) = stored_token(self.session.as_ref()) else {
            return false;
        };
        if is_token_expired(&token, Utc::now()) {
            warn!("Stored auth token has expired");
            return false;
        }
        self.current_user().is_some()
    }

    pub async fn request_otp(&self, email: &str) -> Result<AuthMessage, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::Validation("Please enter a valid email".to_string()));
        }
        Ok(self.api.request_otp(email.trim()).await?)
    }

    pub async fn verify_otp(&self, email: &str, otp_code: &str) -> Result<AuthMessage, AuthError> {
        if !is_valid_otp(otp_code) {
            return Err(AuthError::Validation("Please enter all 6 digits".to_string()));
        }
        let request = OtpVerification {
            email: email.trim().to_string(),
            otp_code: otp_code.to_string(),
        };
        Ok(self.api.verify_otp(&request).await?)
    }

    pub async fn reset_password(
        &self,
        email: &str,
        otp_code: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<AuthMessage, AuthError> {
        if new_password != confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }
        if !is_present(new_password) {
            return Err(AuthError::Validation("Please enter a new password".to_string()));
        }
        let request = PasswordReset {
            email: email.trim().to_string(),
            otp_code: otp_code.to_string(),
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        Ok(self.api.reset_password(&request).await?)
    }

    /// Send the profile change, then merge it into the stored profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthError> {
        self.api.update_profile(update).await?;

        let mut user = self.current_user().unwrap_or_default();
        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        user.phone_number = Some(update.phone_number.clone()).filter(|p| !p.is_empty());
        user.country = Some(update.country.clone()).filter(|c| !c.is_empty());
        store_user(self.session.as_ref(), &user)?;

        Ok(user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<AuthMessage, AuthError> {
        if change.new_password != change.confirm_password {
            return Err(AuthError::Validation("New passwords do not match".to_string()));
        }
        Ok(self.api.change_password(change).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::MemorySessionStore;

    fn service() -> AuthService {
        // Port 9 (discard) is never serving HTTP, so any request fails fast
        let api = ApiClient::new("http://127.0.0.1:9/".to_string(), MemorySessionStore::shared());
        AuthService::new(api)
    }

    #[tokio::test]
    async fn test_login_rejects_bad_email_before_network() {
        let auth = service();
        let err = auth.login("not-an-email", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_verify_otp_requires_six_digits() {
        let auth = service();
        let err = auth.verify_otp("a@b.co", "123").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_reset_password_mismatch() {
        let auth = service();
        let err = auth
            .reset_password("a@b.co", "123456", "one", "two")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Passwords do not match"));
    }

    #[test]
    fn test_logged_in_needs_token_and_user() {
        let auth = service();
        assert!(!auth.is_logged_in());

        let session = auth.api().session().clone();
        session.set(SessionKey::AuthToken, "opaque-token").unwrap();
        assert!(!auth.is_logged_in());

        store_user(
            session.as_ref(),
            &UserProfile {
                email: "a@b.co".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(auth.is_logged_in());

        auth.logout().unwrap();
        assert!(!auth.is_logged_in());
        assert!(auth.current_user().is_none());
    }
}
