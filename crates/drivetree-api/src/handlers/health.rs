//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let reachable = state
        .catalog
        .store()
        .health_check()
        .await
        .unwrap_or(false);
    let status = state.catalog.status().await;

    let overall = if reachable && !status.partial {
        "ok"
    } else {
        "degraded"
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: overall.to_string(),
        provider: status.provider,
        remote_store: if reachable { "reachable" } else { "unreachable" }.to_string(),
        item_count: status.item_count,
        folder_count: status.folder_count,
        partial: status.partial,
        fetched_at: status.fetched_at,
        unresolved_folders: status.unresolved_folders,
        uptime_seconds: state.uptime_seconds(),
    }))
}
