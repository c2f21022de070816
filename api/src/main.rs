use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sg_api::{create_app, AppState, SessionService};
use sg_core::clock::{Clock, SystemClock};
use sg_core::repositories::{InMemoryRevocationStore, RevocationStore, UserDirectory};
use sg_core::services::session::{CredentialVerifier, SessionController};
use sg_core::services::token::{
    SigningKeys, TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator,
};
use sg_infra::cache::{RedisClient, RedisRevocationStore};
use sg_infra::credentials::BcryptCredentialVerifier;
use sg_infra::database::{DatabasePool, MySqlUserDirectory};
use sg_shared::config::{LogFormat, LoggingConfig, RevocationBackend};
use sg_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting SessionGuard API server");

    let (state, directory_pool) = build_state(&config).await?;
    let state = web::Data::new(state);
    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    directory_pool.close().await;
    info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

/// Load key material, connect the store and directory, and wire the controller
///
/// Any failure here aborts startup.
async fn build_state(config: &AppConfig) -> anyhow::Result<(AppState, DatabasePool)> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let token_config = TokenServiceConfig::from_jwt_config(&config.jwt)?;
    let keys = SigningKeys::from_config(&config.jwt, token_config.algorithm)
        .context("Failed to load JWT key material")?;
    match keys.key_files() {
        Some((private_key, public_key)) => info!(
            algorithm = ?keys.algorithm(),
            private_key = %private_key.display(),
            public_key = %public_key.display(),
            "Signing keys loaded from PEM files"
        ),
        None => info!(algorithm = ?keys.algorithm(), "Signing keys loaded from shared secret"),
    }

    let codec = Arc::new(TokenCodec::new(Arc::new(keys), &token_config, clock.clone()));
    let issuer = Arc::new(TokenIssuer::new(codec.clone(), &token_config)?);

    let store: Arc<dyn RevocationStore> = match config.cache.backend() {
        RevocationBackend::Memory => {
            warn!(
                production = config.environment.is_production(),
                "Using in-memory revocation store; revocations are lost on restart and not shared between instances"
            );
            Arc::new(InMemoryRevocationStore::new(clock.clone()))
        }
        RevocationBackend::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .context("Failed to connect to the revocation store")?;
            Arc::new(RedisRevocationStore::new(client))
        }
    };
    let validator = Arc::new(TokenValidator::new(codec, store.clone()));

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the user directory")?;
    pool.run_migrations().await?;

    let directory: Arc<dyn UserDirectory> =
        Arc::new(MySqlUserDirectory::new(pool.get_pool().clone()));
    let verifier: Arc<dyn CredentialVerifier> =
        Arc::new(BcryptCredentialVerifier::new(directory.clone())?);

    let session: Arc<SessionService> = Arc::new(SessionController::new(
        verifier, directory, issuer, validator, store, clock,
    ));

    Ok((AppState::new(session), pool))
}
