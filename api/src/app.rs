//! Application factory
//!
//! Builds the actix-web [`App`] around an already wired [`AppState`], so the
//! binary and the HTTP tests share one route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sg_shared::{error_codes, ErrorResponse};

use crate::handlers::error::{json_error_handler, query_error_handler};
use crate::middleware::auth::BearerAuth;
use crate::routes::{auth, health, users, AppState};

/// Create the application with all routes
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register))
                        .route("/login", web::post().to(auth::login::login))
                        .route("/refresh", web::post().to(auth::refresh::refresh))
                        .route("/logout", web::post().to(auth::logout::logout))
                        .service(
                            web::resource("/verify")
                                .route(web::get().to(auth::verify::verify))
                                .wrap(BearerAuth::new()),
                        ),
                )
                .service(
                    web::scope("/users")
                        .service(
                            web::resource("/me")
                                .route(web::get().to(users::me::me))
                                .route(web::put().to(users::update::update)),
                        )
                        .route("/me/logins", web::get().to(users::logins::logins)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
