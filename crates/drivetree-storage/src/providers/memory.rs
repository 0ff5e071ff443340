//! In-memory store backed by a fixed item list.
//!
//! Used for fixture-driven deployments and tests. Pages are served from a
//! snapshot of the list; the page token is the offset of the next item.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use drivetree_core::error::{AppError, ErrorKind};
use drivetree_core::result::AppResult;
use drivetree_core::traits::{ItemPage, RemoteFileStore, RemoteItem};

/// On-disk fixture layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Designated root folder id.
    pub root_id: String,
    /// Flat item listing.
    pub items: Vec<RemoteItem>,
}

/// Remote store serving items from memory.
#[derive(Debug)]
pub struct MemoryStore {
    root_id: String,
    items: RwLock<Vec<RemoteItem>>,
    /// Items per page; 0 serves everything on one page.
    page_size: usize,
    /// Zero-based page index that fails, for exercising partial fetches.
    fail_at_page: RwLock<Option<usize>>,
    list_calls: AtomicUsize,
}

impl MemoryStore {
    /// Create a store over the given items.
    pub fn new(root_id: impl Into<String>, items: Vec<RemoteItem>) -> Self {
        Self {
            root_id: root_id.into(),
            items: RwLock::new(items),
            page_size: 0,
            fail_at_page: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Create a store from a parsed fixture.
    pub fn from_fixture(fixture: Fixture) -> Self {
        Self::new(fixture.root_id, fixture.items)
    }

    /// Load a fixture file.
    pub async fn from_fixture_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read fixture '{}'", path.display()),
                e,
            )
        })?;
        let fixture: Fixture = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            items = fixture.items.len(),
            "Loaded fixture"
        );
        Ok(Self::from_fixture(fixture))
    }

    /// Serve items in pages of `page_size` (0 = single page).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Make the given zero-based page fail.
    pub fn failing_at_page(mut self, page: usize) -> Self {
        *self.fail_at_page.get_mut() = Some(page);
        self
    }

    /// Change which page fails after construction; `None` clears it.
    pub async fn set_failing_page(&self, page: Option<usize>) {
        *self.fail_at_page.write().await = page;
    }

    /// Replace the served items.
    pub async fn replace_items(&self, items: Vec<RemoteItem>) {
        *self.items.write().await = items;
    }

    /// Number of `list_items` calls so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::Relaxed)
    }

    fn parse_token(token: Option<&str>) -> AppResult<usize> {
        match token {
            None => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::validation(format!("Invalid page token '{raw}'"))),
        }
    }
}

#[async_trait]
impl RemoteFileStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn root_id(&self) -> AppResult<String> {
        Ok(self.root_id.clone())
    }

    async fn list_items(&self, page_token: Option<&str>) -> AppResult<ItemPage> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);

        let offset = Self::parse_token(page_token)?;
        let items = self.items.read().await;
        let page_len = if self.page_size == 0 {
            items.len()
        } else {
            self.page_size
        };

        let page_index = if page_len == 0 { 0 } else { offset / page_len };
        if *self.fail_at_page.read().await == Some(page_index) {
            return Err(AppError::external_service(format!(
                "Simulated failure on page {page_index}"
            )));
        }

        let start = offset.min(items.len());
        let end = (start + page_len).min(items.len());
        let next_page_token = (end < items.len()).then(|| end.to_string());

        Ok(ItemPage {
            items: items[start..end].to_vec(),
            next_page_token,
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn items(count: usize) -> Vec<RemoteItem> {
        (0..count)
            .map(|i| RemoteItem {
                id: format!("item-{i}"),
                name: format!("Item {i}"),
                mime_type: "text/plain".to_string(),
                parents: vec!["root".to_string()],
                description: None,
                web_link: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_single_page_by_default() {
        let store = MemoryStore::new("root", items(5));
        let page = store.list_items(None).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_next());
        assert_eq!(store.root_id().await.unwrap(), "root");
    }

    #[tokio::test]
    async fn test_paging() {
        let store = MemoryStore::new("root", items(5)).with_page_size(2);

        let first = store.list_items(None).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.next_page_token.as_deref(), Some("2"));

        let last = store.list_items(Some("4")).await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id, "item-4");
        assert!(!last.has_next());
        assert_eq!(store.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_page() {
        let store = MemoryStore::new("root", items(5))
            .with_page_size(2)
            .failing_at_page(1);

        assert!(store.list_items(None).await.is_ok());
        let err = store.list_items(Some("2")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let store = MemoryStore::new("root", items(1));
        let err = store.list_items(Some("not-a-number")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_from_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "rootId": "root",
                "items": [
                    {{ "id": "a", "name": "A", "mimeType": "application/vnd.google-apps.folder", "parents": ["root"] }}
                ]
            }}"#
        )
        .unwrap();

        let store = MemoryStore::from_fixture_file(file.path()).await.unwrap();
        let page = store.list_items(None).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.items[0].is_folder());
    }

    #[tokio::test]
    async fn test_missing_fixture_is_configuration_error() {
        let err = MemoryStore::from_fixture_file("/nonexistent/fixture.json")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
