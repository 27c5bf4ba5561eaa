use lodge_server::{AppState, build_router, logger};

use lodge_auth::{JwtValidator, TokenIssuer};
use lodge_club::Club;
use lodge_db::MasonRepository;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration; a missing signing secret is fatal
    // here, before any request is accepted.
    let config = lodge_config::Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.logging.file.clone(),
        config.logging.colored,
    )?;

    info!("Starting lodge-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    info!("Connecting to database: {}", config.database.path);
    let pool = lodge_db::connect(&config.database.path).await?;
    info!("Database ready, migrations complete");

    // The signing secret is fixed at startup and injected into the issuer
    // and validator; nothing reads it from the environment afterwards.
    let secret = config.auth.jwt_secret.as_bytes();
    let club = Arc::new(Club::new(
        Arc::new(MasonRepository::new(pool)),
        TokenIssuer::with_hs256(secret),
        JwtValidator::with_hs256(secret),
    ));

    // Build router
    let app = build_router(AppState { club });

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
