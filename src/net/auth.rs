//! Authentication endpoints — login plus the password-recovery flows.

use std::sync::Arc;

use serde::Serialize;

use super::ApiClient;
use crate::auth::LoginData;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    token: &'a str,
    new_password: &'a str,
}

pub struct AuthApi {
    api: Arc<ApiClient>,
}

impl AuthApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token + user payload. The caller hands
    /// the result to [`crate::auth::AuthGate::login`], which persists it.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on bad credentials, otherwise the transport error.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        self.api.post_json("auth/login", credentials).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the registration payload.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.api.post_empty("auth/register", request).await
    }

    /// Request a password-reset email.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.api
            .post_empty("auth/forgotPassword", &ForgotPasswordRequest { email })
            .await
    }

    /// Check whether a reset token from the email link is still valid.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn verify_token(&self, token: &str) -> Result<bool, ApiError> {
        self.api
            .get_json(&format!("auth/verifyToken/{token}"), &[])
            .await
    }

    /// # Errors
    ///
    /// `Rejected` when the token is stale or the password is refused.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiError> {
        self.api
            .post_empty("auth/changePassword", &ResetPasswordRequest { token, new_password })
            .await
    }
}
