//! Folder hierarchy handlers.

use axum::Json;
use axum::extract::{Path, State};

use drivetree_entity::HierarchyNode;

use crate::state::AppState;

/// GET /api/hierarchy
///
/// Returns the bare node array the tree widget binds to.
pub async fn get_hierarchy(State(state): State<AppState>) -> Json<Vec<HierarchyNode>> {
    Json(state.catalog.hierarchy().await)
}

/// GET /api/hierarchy/{id}
///
/// The id is accepted for route compatibility and does not narrow the
/// result.
pub async fn get_hierarchy_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<HierarchyNode>> {
    tracing::debug!(%id, "Hierarchy requested by id, returning full forest");
    Json(state.catalog.hierarchy().await)
}
