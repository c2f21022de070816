use serde::{Deserialize, Serialize};
use validator::Validate;

use sg_core::domain::entities::token::{TokenPair, TOKEN_TYPE_BEARER};

/// Request body for `POST /api/v1/auth/login`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    /// Login identifier
    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for `POST /api/v1/auth/register`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Email is not a valid address"))]
    pub email: String,

    #[validate(length(min = 6, max = 32, message = "Password must be between 6 and 32 characters"))]
    pub password: String,
}

/// Token pair issued on a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl From<TokenPair> for LoginResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.access_expires_in,
            refresh_expires_in: pair.refresh_expires_in,
        }
    }
}

/// Request body for `POST /api/v1/auth/refresh`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Fresh access token returned by a refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AccessTokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}

/// Request body for `POST /api/v1/auth/logout`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Subject of a verified access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub subject: String,
}
