//! Liveness and health check handlers.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{ApiResponse, BannerResponse, HealthResponse};
use crate::state::AppState;

/// GET /
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Backend is running".to_string(),
    })
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let connected = match state.folder_store.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Store health probe failed");
            false
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: if connected { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "unavailable" }.to_string(),
    }))
}
