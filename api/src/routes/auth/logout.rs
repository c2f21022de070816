use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LogoutRequest, LogoutResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented refresh token until its natural expiry.
///
/// ## Errors
/// - 401 Unauthorized: Token is malformed, forged, expired or not a refresh token
/// - 409 Conflict: Token was already revoked
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn logout(
    state: web::Data<AppState>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.session.logout(&request.refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Successfully logged out".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
