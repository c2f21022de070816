use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use sg_core::errors::{AuthError, DomainError, TokenError};
use sg_shared::{error_codes, ErrorResponse, IntoErrorResponse};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(AuthError::PrincipalInactive) => StatusCode::FORBIDDEN,
        DomainError::Auth(AuthError::InvalidCredentials | AuthError::PrincipalNotFound) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Auth(AuthError::IdentifierTaken)
        | DomainError::Token(TokenError::AlreadyRevoked) => StatusCode::CONFLICT,
        DomainError::Token(
            TokenError::Malformed
            | TokenError::InvalidSignature
            | TokenError::Expired
            | TokenError::WrongTokenType { .. }
            | TokenError::Revoked,
        ) => StatusCode::UNAUTHORIZED,
        DomainError::Token(TokenError::EncodingFailed | TokenError::KeyLoadError { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Directory { .. }
        | DomainError::Configuration { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into its JSON error response
///
/// Server-side failures are logged with full detail; the client only sees
/// the error code and a generic message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(error.to_error_response())
}

/// 400 response listing the failing fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    HttpResponse::BadRequest().json(response)
}

/// 401 response for requests without a usable `Authorization: Bearer` header
pub fn missing_bearer_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        error_codes::UNAUTHORIZED,
        "Missing bearer token",
    ))
}

/// Replaces actix's plain-text body for unparseable JSON payloads
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid request body: {}", err),
    ));
    InternalError::from_response(err, response).into()
}

/// Replaces actix's plain-text body for unparseable query strings
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid query string: {}", err),
    ));
    InternalError::from_response(err, response).into()
}
