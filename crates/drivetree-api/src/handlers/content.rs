//! Content list handlers.

use axum::Json;
use axum::extract::State;

use drivetree_entity::HierarchyNode;

use crate::state::AppState;

/// GET /api/content/articles
pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<HierarchyNode>> {
    Json(state.catalog.articles().await)
}

/// GET /api/content/videos
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<HierarchyNode>> {
    Json(state.catalog.videos().await)
}

/// GET /api/content/folders
pub async fn list_content_folders(State(state): State<AppState>) -> Json<Vec<HierarchyNode>> {
    Json(state.catalog.content_folders().await)
}
