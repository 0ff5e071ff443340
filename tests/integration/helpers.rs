//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use drivetree_api::{AppState, build_app};
use drivetree_core::config::{
    AppConfig, ContentFolderConfig, DriveProvider, FetchConfig, FetchPolicy,
};
use drivetree_core::traits::RemoteItem;
use drivetree_service::CatalogService;
use drivetree_storage::MemoryStore;
use drivetree_storage::providers::memory::Fixture;

/// Fixture listing used by every test
pub const FIXTURE_PATH: &str = "tests/fixtures/items.json";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the catalog, for swapping the listing mid-test
    pub store: Arc<MemoryStore>,
    /// Catalog service shared with the router
    pub catalog: Arc<CatalogService>,
}

impl TestApp {
    /// Create a test application over the fixture listing
    pub async fn new() -> Self {
        let store = MemoryStore::from_fixture_file(FIXTURE_PATH)
            .await
            .expect("Failed to load fixture");
        Self::with_store(store, FetchPolicy::Strict).await
    }

    /// Create a test application over the given store
    pub async fn with_store(store: MemoryStore, policy: FetchPolicy) -> Self {
        let config = test_config(policy);
        let store = Arc::new(store);

        let catalog = CatalogService::load(
            store.clone(),
            config.content.clone(),
            config.drive.fetch.clone(),
        )
        .await
        .expect("Failed to load catalog");
        let catalog = Arc::new(catalog);

        let router = build_app(AppState::new(Arc::new(config), Arc::clone(&catalog)));

        Self {
            router,
            store,
            catalog,
        }
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    /// Send a POST request without a body
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    /// Send a request through the router
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Ids of the nodes in a JSON array body
    pub fn ids(&self) -> Vec<String> {
        ids_of(&self.body)
    }
}

/// Ids of the nodes in a JSON array
pub fn ids_of(nodes: &Value) -> Vec<String> {
    nodes
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|n| n["id"].as_str().expect("Node without id").to_string())
        .collect()
}

/// Items of the fixture listing
pub fn fixture_items() -> Vec<RemoteItem> {
    let raw = std::fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture");
    let fixture: Fixture = serde_json::from_str(&raw).expect("Failed to parse fixture");
    fixture.items
}

fn test_config(policy: FetchPolicy) -> AppConfig {
    let mut config = AppConfig::default();
    config.drive.provider = DriveProvider::Fixture;
    config.drive.fixture.path = FIXTURE_PATH.to_string();
    config.drive.fetch = FetchConfig {
        policy,
        ..FetchConfig::default()
    };
    config.content.folders = vec![
        ContentFolderConfig::new("Articles", true),
        ContentFolderConfig::new("videos", true),
    ];
    config
}
