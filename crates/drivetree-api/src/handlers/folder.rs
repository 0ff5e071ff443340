//! Folder lookup handlers.

use axum::Json;
use axum::extract::{Path, State};

use drivetree_entity::HierarchyNode;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/folders/{name}/children
pub async fn list_children(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<HierarchyNode>>> {
    let children = state.catalog.child_folders(&name).await?;
    Ok(Json(children))
}
