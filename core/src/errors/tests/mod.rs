//! Unit tests for domain error types

use sg_shared::IntoErrorResponse;

use super::*;
use crate::domain::entities::token::TokenKind;

#[test]
fn test_wrong_token_type_message() {
    let error = TokenError::WrongTokenType {
        expected: TokenKind::Refresh,
        actual: TokenKind::Access,
    };
    assert_eq!(error.to_string(), "Wrong token type: expected refresh, got access");
    assert_eq!(error.error_code(), "TOKEN_WRONG_TYPE");
}

#[test]
fn test_domain_error_bridges() {
    let error: DomainError = AuthError::InvalidCredentials.into();
    assert!(matches!(error, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(error.error_code(), "INVALID_CREDENTIALS");

    let error: DomainError = TokenError::AlreadyRevoked.into();
    assert_eq!(error.error_code(), "TOKEN_ALREADY_REVOKED");

    let error: DomainError = AuthError::IdentifierTaken.into();
    assert_eq!(error.error_code(), "EMAIL_ALREADY_REGISTERED");
    assert_eq!(error.public_message(), "Email already registered");
}

#[test]
fn test_store_error_hides_backend_detail() {
    let error: DomainError = StoreError::unavailable("Connection refused (os error 111)").into();
    let response = error.to_error_response();

    assert_eq!(response.error, "STORE_UNAVAILABLE");
    assert!(!response.message.contains("os error"));
}

#[test]
fn test_internal_errors_share_code() {
    let directory = DomainError::Directory {
        message: "pool timed out".to_string(),
    };
    let key = DomainError::from(TokenError::KeyLoadError {
        message: "missing file".to_string(),
    });

    assert_eq!(directory.error_code(), "INTERNAL_ERROR");
    assert_eq!(key.error_code(), "INTERNAL_ERROR");
    assert_eq!(directory.to_error_response().message, "Internal server error");
}
