//! Catalog API server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use catalog_api::router::build_router;
use catalog_api::state::AppState;
use catalog_auth::jwt::{JwtDecoder, JwtEncoder};
use catalog_auth::password::PasswordHasher;
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::repositories::{ProductRepository, UserRepository};

#[tokio::main]
async fn main() {
    let env = std::env::var("CATALOG_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Catalog API v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = catalog_database::connection::create_pool(&config.database).await?;
    catalog_database::migration::run_migrations(&db_pool).await?;

    let state = AppState {
        user_repo: Arc::new(UserRepository::new(db_pool.clone())),
        product_repo: Arc::new(ProductRepository::new(db_pool)),
        password_hasher: Arc::new(PasswordHasher::new()),
        jwt_encoder: Arc::new(JwtEncoder::new(&config.auth)),
        jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
