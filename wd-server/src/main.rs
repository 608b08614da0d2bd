use wd_auth::JwtValidator;
use wd_server::state::AppState;
use wd_server::{build_router, config::Config, logger};

use std::error::Error;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    logger::initialize(&config.log_level, config.log_colored)?;

    info!("Starting wd-server v{}", env!("CARGO_PKG_VERSION"));

    info!("Connecting to database: {}", config.database_url);
    let pool = wd_db::connect(&config.database_url, config.database_max_connections).await?;

    info!("Running database migrations...");
    wd_db::run_migrations(&pool).await?;

    let jwt_validator = match (&config.jwt_secret, &config.jwt_public_key) {
        (Some(secret), _) => {
            info!("JWT validation: HS256 (shared secret)");
            JwtValidator::with_hs256(secret.as_bytes())
        }
        (None, Some(public_key)) => {
            info!("JWT validation: RS256 (public key)");
            JwtValidator::with_rs256(public_key)?
        }
        (None, None) => unreachable!("config validation requires a JWT key"),
    };

    let state = AppState::new(pool, jwt_validator, config.cache_capacity_bytes);
    let router = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}
