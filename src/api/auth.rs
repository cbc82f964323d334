use super::client::{ApiClient, ApiError};
use crate::models::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerification {
    pub email: String,
    pub otp_code: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub email: String,
    pub otp_code: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Generic `{ message }` acknowledgement of the auth endpoints
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct AuthMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post("auth/login", request).await
    }

    /// Profile of the user owning `token`
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.post("auth/me", &TokenBody { token }).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthMessage, ApiError> {
        self.post("auth/register", request).await
    }

    pub async fn request_otp(&self, email: &str) -> Result<AuthMessage, ApiError> {
        self.post("auth/request-otp", &EmailBody { email }).await
    }

    pub async fn verify_otp(&self, request: &OtpVerification) -> Result<AuthMessage, ApiError> {
        self.post("auth/verify-otp", request).await
    }

    pub async fn reset_password(&self, request: &PasswordReset) -> Result<AuthMessage, ApiError> {
        self.post("auth/reset-password", request).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<AuthMessage, ApiError> {
        self.post("auth/update-profile", update).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<AuthMessage, ApiError> {
        self.post("auth/change-password", change).await
    }
}
