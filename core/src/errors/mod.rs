//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{AuthError, StoreError, TokenError};

use sg_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("User directory error: {message}")]
    Directory { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Directory { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(err) => err.error_code(),
            DomainError::Token(err) => err.error_code(),
            DomainError::Store(err) => err.error_code(),
        }
    }

    /// Client-facing message
    ///
    /// Infrastructure details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Directory { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => "Internal server error".to_string(),
            DomainError::Store(_) => "Token store unavailable".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.public_message())
    }
}
