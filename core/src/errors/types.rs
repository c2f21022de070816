//! Error kinds raised by the token lifecycle
//!
//! Login, token and store failures are kept apart so callers can map each
//! one to a distinct response without string matching.

use sg_shared::error_codes;
use thiserror::Error;

use crate::domain::entities::token::TokenKind;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identifier or wrong secret; the two are indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Principal is inactive")]
    PrincipalInactive,

    #[error("Principal not found")]
    PrincipalNotFound,

    /// Another principal already uses this login identifier
    #[error("Email already registered")]
    IdentifierTaken,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::PrincipalInactive => error_codes::PRINCIPAL_INACTIVE,
            AuthError::PrincipalNotFound => error_codes::PRINCIPAL_NOT_FOUND,
            AuthError::IdentifierTaken => error_codes::EMAIL_ALREADY_REGISTERED,
        }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token format")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Wrong token type: expected {expected}, got {actual}")]
    WrongTokenType { expected: TokenKind, actual: TokenKind },

    #[error("Token revoked")]
    Revoked,

    #[error("Token already revoked")]
    AlreadyRevoked,

    #[error("Token encoding failed")]
    EncodingFailed,

    #[error("Signing key could not be loaded: {message}")]
    KeyLoadError { message: String },
}

impl TokenError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::Malformed => error_codes::TOKEN_MALFORMED,
            TokenError::InvalidSignature => error_codes::TOKEN_INVALID_SIGNATURE,
            TokenError::Expired => error_codes::TOKEN_EXPIRED,
            TokenError::WrongTokenType { .. } => error_codes::TOKEN_WRONG_TYPE,
            TokenError::Revoked => error_codes::TOKEN_REVOKED,
            TokenError::AlreadyRevoked => error_codes::TOKEN_ALREADY_REVOKED,
            TokenError::EncodingFailed | TokenError::KeyLoadError { .. } => {
                error_codes::INTERNAL_ERROR
            }
        }
    }
}

/// Revocation store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Revocation store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        error_codes::STORE_UNAVAILABLE
    }
}
