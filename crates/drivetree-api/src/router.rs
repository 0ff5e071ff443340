//! Route definitions for the DriveTree HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(hierarchy_routes())
        .merge(content_routes())
        .merge(folder_routes())
        .merge(catalog_routes())
        .merge(health_routes());

    let server = &state.config.server;
    let cors = middleware::cors::build_cors_layer(&server.cors);
    let timeout = middleware::timeout::build_timeout_layer(server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .layer(timeout)
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Folder forest for the tree widget
fn hierarchy_routes() -> Router<AppState> {
    Router::new()
        .route("/hierarchy", get(handlers::hierarchy::get_hierarchy))
        .route(
            "/hierarchy/{id}",
            get(handlers::hierarchy::get_hierarchy_by_id),
        )
}

/// Articles, videos and classified content folders
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/content/articles", get(handlers::content::list_articles))
        .route("/content/videos", get(handlers::content::list_videos))
        .route(
            "/content/folders",
            get(handlers::content::list_content_folders),
        )
}

/// Folder lookups by name
fn folder_routes() -> Router<AppState> {
    Router::new().route(
        "/folders/{name}/children",
        get(handlers::folder::list_children),
    )
}

/// Snapshot status and refresh
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog/status", get(handlers::catalog::get_status))
        .route("/catalog/refresh", post(handlers::catalog::refresh))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
