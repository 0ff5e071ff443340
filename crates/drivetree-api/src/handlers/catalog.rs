//! Catalog lifecycle handlers.

use axum::Json;
use axum::extract::State;

use drivetree_service::CatalogStatus;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/catalog/status
pub async fn get_status(State(state): State<AppState>) -> Json<ApiResponse<CatalogStatus>> {
    Json(ApiResponse::ok(state.catalog.status().await))
}

/// POST /api/catalog/refresh
pub async fn refresh(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CatalogStatus>>> {
    let status = state.catalog.refresh().await?;
    tracing::info!(
        items = status.item_count,
        partial = status.partial,
        "Catalog refreshed on request"
    );
    Ok(Json(ApiResponse::ok(status)))
}
