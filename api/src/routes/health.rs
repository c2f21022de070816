use actix_web::{web, HttpResponse};

use crate::routes::AppState;

/// Handler for GET /health
///
/// Healthy only while the revocation store answers; token checks fail
/// closed without it.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store_up = match state.session.store().health_check().await {
        Ok(up) => up,
        Err(error) => {
            tracing::warn!(error = %error, "Revocation store health check failed");
            false
        }
    };

    let body = serde_json::json!({
        "status": if store_up { "healthy" } else { "unhealthy" },
        "service": "sessionguard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "revocation_store": if store_up { "up" } else { "down" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if store_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
