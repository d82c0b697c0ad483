//! Application builder: wires router, middleware and state into an Axum app,
//! and runs the HTTP server.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use explorer_core::config::AppConfig;
use explorer_core::error::{AppError, ErrorKind};
use explorer_database::DatabasePool;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the server over PostgreSQL-backed stores until Ctrl+C / SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let state = AppState::new(config, Arc::new(db.folders()), Arc::new(db.files()));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .inspect_err(|e| error!(%addr, error = %e, "Failed to bind listener"))?;

    info!(%addr, "Explorer server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    db.close().await;
    info!("Explorer server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
