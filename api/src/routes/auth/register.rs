use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::RegisterRequest;
use crate::dto::user::PrincipalResponse;
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates an active principal. The secret is stored as a bcrypt hash.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "between 6 and 32 characters"
/// }
/// ```
///
/// ## Success (201 Created)
/// The new principal, without its credential hash.
///
/// ## Errors
/// - 400 Bad Request: Malformed email or password length out of range
/// - 409 Conflict: Email already registered
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.session.register(&request.email, &request.password).await {
        Ok(principal) => HttpResponse::Created().json(PrincipalResponse::from(principal)),
        Err(error) => handle_domain_error(error),
    }
}
