use actix_web::{web, HttpResponse};

use crate::dto::user::SessionResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::BearerToken;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/me
///
/// The caller's principal and `logged_in_at`, the issue time of the
/// presented access token.
///
/// ## Errors
/// - 401 Unauthorized: Token rejected or principal no longer exists
/// - 403 Forbidden: Principal is deactivated
pub async fn me(state: web::Data<AppState>, token: BearerToken) -> HttpResponse {
    match state.session.current_session(&token.0).await {
        Ok((principal, claims)) => HttpResponse::Ok().json(SessionResponse::new(principal, &claims)),
        Err(error) => handle_domain_error(error),
    }
}
