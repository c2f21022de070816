use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::user::{HistoryQuery, LoginEventResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::BearerToken;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/me/logins?skip=0&limit=20
///
/// Login events of the calling principal, newest first.
pub async fn logins(
    state: web::Data<AppState>,
    token: BearerToken,
    query: web::Query<HistoryQuery>,
) -> HttpResponse {
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    match state
        .session
        .login_history(&token.0, query.skip(), query.limit())
        .await
    {
        Ok(events) => {
            let events: Vec<LoginEventResponse> =
                events.into_iter().map(LoginEventResponse::from).collect();
            HttpResponse::Ok().json(events)
        }
        Err(error) => handle_domain_error(error),
    }
}
