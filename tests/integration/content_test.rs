//! Integration tests for content lists and folder lookups.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_articles() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/content/articles").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.ids(),
        vec!["doc-intro", "doc-setup", "doc-changelog"]
    );

    let intro = &response.body[0];
    assert_eq!(intro["title"], "Getting Started");
    assert_eq!(intro["tags"], serde_json::json!(["intro", "basics"]));
    assert_eq!(intro["description"], "Start here");
    assert_eq!(intro["isVideo"], false);
    assert!(intro.get("children").is_none());

    let changelog = &response.body[2];
    assert_eq!(changelog["title"], "changelog.txt");
    assert_eq!(changelog["description"], "Release notes for 2023");
}

#[tokio::test]
async fn test_videos() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/content/videos").await;

    assert_eq!(response.status, StatusCode::OK);
    // stray.mov sits outside the configured folders
    assert_eq!(response.ids(), vec!["vid-keynote", "vid-teaser"]);
    assert_eq!(response.body[0]["title"], "Keynote");
    assert_eq!(response.body[0]["isVideo"], true);
}

#[tokio::test]
async fn test_content_folders() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/content/folders").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec!["f-guides", "f-news", "f-talks"]);
    assert_eq!(
        helpers::ids_of(&response.body[0]["children"]),
        vec!["f-guides-2023"]
    );
}

#[tokio::test]
async fn test_child_folders_by_name() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/folders/ARTICLES/children").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec!["f-guides", "f-news"]);
    assert_eq!(response.body[0]["children"], serde_json::json!([]));
}

#[tokio::test]
async fn test_child_folders_unknown_name() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/folders/Nowhere/children").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("Nowhere")
    );
}

#[tokio::test]
async fn test_catalog_status() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/catalog/status").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["provider"], "memory");
    assert_eq!(data["rootId"], "0AROOT");
    assert_eq!(data["itemCount"], 16);
    assert_eq!(data["folderCount"], 9);
    assert_eq!(data["contentCount"], 5);
    assert_eq!(data["partial"], false);
    assert_eq!(data["unresolvedFolders"], serde_json::json!([]));
}
