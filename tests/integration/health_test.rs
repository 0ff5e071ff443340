//! Integration tests for health endpoints.

mod helpers;

use axum::http::StatusCode;

use drivetree_core::config::FetchPolicy;
use drivetree_storage::MemoryStore;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
    assert!(response.body["data"]["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_health_detailed() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/health/detailed").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["status"], "ok");
    assert_eq!(data["provider"], "memory");
    assert_eq!(data["remoteStore"], "reachable");
    assert_eq!(data["itemCount"], 16);
    assert_eq!(data["folderCount"], 9);
    assert!(data["uptimeSeconds"].is_u64());
    assert!(data.get("item_count").is_none());
    assert_eq!(data["partial"], false);
}

#[tokio::test]
async fn test_partial_listing_reports_degraded() {
    let store = MemoryStore::new("0AROOT", helpers::fixture_items())
        .with_page_size(5)
        .failing_at_page(2);
    let app = helpers::TestApp::with_store(store, FetchPolicy::Lenient).await;

    let response = app.get("/api/health/detailed").await;

    let data = &response.body["data"];
    assert_eq!(data["status"], "degraded");
    assert_eq!(data["partial"], true);
    assert_eq!(data["itemCount"], 10);

    // the forest is still served from what arrived
    let hierarchy = app.get("/api/hierarchy").await;
    assert_eq!(hierarchy.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
