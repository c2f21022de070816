use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccessTokenResponse, RefreshTokenRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new access token. The presented refresh
/// token is consumed and cannot be used again.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "token_type": "bearer",
///     "expires_in": 900
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Malformed, forged, expired, revoked or access token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn refresh(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.session.refresh(&request.refresh_token).await {
        Ok(access_token) => {
            let expires_in = state.session.access_token_lifetime().num_seconds();
            HttpResponse::Ok().json(AccessTokenResponse::bearer(access_token, expires_in))
        }
        Err(error) => handle_domain_error(error),
    }
}
