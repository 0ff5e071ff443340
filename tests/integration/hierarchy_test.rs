//! Integration tests for the folder hierarchy endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::Value;

use drivetree_core::traits::{FOLDER_MIME_TYPE, RemoteItem};

#[tokio::test]
async fn test_hierarchy_returns_forest() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hierarchy").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec!["f-archive", "f-articles", "f-videos"]);

    let articles = &response.body[1];
    assert_eq!(
        helpers::ids_of(&articles["children"]),
        vec!["f-guides", "f-news"]
    );
    let guides = &articles["children"][0];
    assert_eq!(guides["title"], "How-To Guides");
    assert_eq!(guides["tags"], serde_json::json!(["docs"]));
    assert_eq!(
        helpers::ids_of(&guides["children"]),
        vec!["f-guides-2023"]
    );
}

#[tokio::test]
async fn test_hierarchy_node_shape() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hierarchy").await;
    let videos = &response.body[2];

    assert_eq!(videos["isFolder"], true);
    assert_eq!(videos["isVideo"], false);
    assert_eq!(videos["checked"], false);
    assert_eq!(videos["expanded"], false);
    assert_eq!(videos["mimeType"], FOLDER_MIME_TYPE);
    assert_eq!(videos["parentIds"], serde_json::json!(["0AROOT"]));
    assert_eq!(
        videos["url"],
        "https://drive.google.com/drive/folders/f-videos"
    );
    assert_eq!(videos["children"][0]["children"], serde_json::json!([]));
}

#[tokio::test]
async fn test_hierarchy_leaves_out_unreachable_folders() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hierarchy").await;

    let mut seen = Vec::new();
    let mut stack: Vec<&Value> = response.body.as_array().unwrap().iter().collect();
    while let Some(node) = stack.pop() {
        seen.push(node["id"].as_str().unwrap().to_string());
        assert!(node.get("children").is_some(), "folder without children");
        stack.extend(node["children"].as_array().unwrap());
    }

    assert_eq!(seen.len(), 7);
    assert!(!seen.contains(&"f-orphan".to_string()));
    assert!(!seen.contains(&"f-detached".to_string()));
    assert!(!seen.iter().any(|id| id.starts_with("doc-") || id.starts_with("vid-")));
}

#[tokio::test]
async fn test_hierarchy_by_id_returns_full_forest() {
    let app = helpers::TestApp::new().await;

    let full = app.get("/api/hierarchy").await;
    let by_id = app.get("/api/hierarchy/f-videos").await;

    assert_eq!(by_id.status, StatusCode::OK);
    assert_eq!(by_id.body, full.body);
}

#[tokio::test]
async fn test_refresh_picks_up_new_listing() {
    let app = helpers::TestApp::new().await;

    let mut items = helpers::fixture_items();
    items.push(RemoteItem {
        id: "f-new".to_string(),
        name: "Announcements".to_string(),
        mime_type: FOLDER_MIME_TYPE.to_string(),
        parents: vec!["0AROOT".to_string()],
        description: None,
        web_link: None,
    });
    app.store.replace_items(items).await;

    // the snapshot is unchanged until a refresh
    assert_eq!(app.get("/api/hierarchy").await.ids().len(), 3);

    let refreshed = app.post("/api/catalog/refresh").await;
    assert_eq!(refreshed.status, StatusCode::OK);
    assert_eq!(refreshed.body["success"], true);
    assert_eq!(refreshed.body["data"]["itemCount"], 17);

    let response = app.get("/api/hierarchy").await;
    assert_eq!(
        response.ids(),
        vec!["f-new", "f-archive", "f-articles", "f-videos"]
    );
}

#[tokio::test]
async fn test_failed_refresh_keeps_serving_previous_forest() {
    let app = helpers::TestApp::new().await;

    app.store.replace_items(Vec::new()).await;
    app.store.set_failing_page(Some(0)).await;

    let refreshed = app.post("/api/catalog/refresh").await;
    assert_eq!(refreshed.status, StatusCode::BAD_GATEWAY);
    assert_eq!(refreshed.body["error"], "PARTIAL_FETCH");

    let response = app.get("/api/hierarchy").await;
    assert_eq!(response.ids(), vec!["f-archive", "f-articles", "f-videos"]);

    let status = app.get("/api/catalog/status").await;
    assert_eq!(status.body["data"]["itemCount"], 16);
}
