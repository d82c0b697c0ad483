//! Explorer server: folder/file explorer backend.
//!
//! Main entry point that loads configuration, initializes logging,
//! connects to PostgreSQL and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `EXPLORER_CONFIG`, or from `config/` for the
/// environment named by `EXPLORER_ENV` (default `development`).
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("EXPLORER_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env = std::env::var("EXPLORER_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Explorer");

    let db = DatabasePool::connect(&config.database).await?;

    explorer_api::run_server(config, db).await
}
