use actix_web::{http::header::USER_AGENT, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates a principal and issues an access/refresh token pair. The
/// `User-Agent` header is recorded in the principal's login history.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "token_type": "bearer",
///     "expires_in": 900,
///     "refresh_expires_in": 604800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing fields
/// - 401 Unauthorized: Unknown identifier or wrong secret
/// - 403 Forbidden: Principal is deactivated
pub async fn login(
    state: web::Data<AppState>,
    http_request: HttpRequest,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let user_agent = http_request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok());

    match state
        .session
        .login(&request.email, &request.password, user_agent)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(LoginResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
