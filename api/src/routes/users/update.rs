use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::user::{PrincipalResponse, UpdatePrincipalRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::BearerToken;
use crate::routes::AppState;

/// Handler for PUT /api/v1/users/me
///
/// Changes the caller's email and/or password. Tokens issued before an
/// email change stop resolving to the principal; log in again afterwards.
///
/// ## Errors
/// - 400 Bad Request: Malformed email or password length out of range
/// - 401 Unauthorized: Token rejected
/// - 403 Forbidden: Principal is deactivated
/// - 409 Conflict: Email belongs to another principal
pub async fn update(
    state: web::Data<AppState>,
    token: BearerToken,
    request: web::Json<UpdatePrincipalRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .session
        .update_principal(&token.0, request.email.as_deref(), request.password.as_deref())
        .await
    {
        Ok(principal) => HttpResponse::Ok().json(PrincipalResponse::from(principal)),
        Err(error) => handle_domain_error(error),
    }
}
