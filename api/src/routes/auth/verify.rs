use actix_web::HttpResponse;

use crate::dto::auth::VerifyResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/verify
///
/// Runs behind [`BearerAuth`](crate::middleware::BearerAuth); reaching the
/// handler means the access token is valid and unrevoked.
pub async fn verify(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(VerifyResponse {
        subject: auth.subject,
    })
}
