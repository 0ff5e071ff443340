//! Remote file store trait for pluggable listing backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// MIME type the remote store uses to mark an item as a folder.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// A file or folder record as listed by the remote store.
///
/// Field names follow the remote wire format so fixtures and API pages
/// deserialize without an intermediate type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteItem {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// MIME type; [`FOLDER_MIME_TYPE`] marks a folder.
    #[serde(default)]
    pub mime_type: String,
    /// Ordered parent ids. Only the first one is consulted.
    #[serde(default)]
    pub parents: Vec<String>,
    /// Free text, optionally `key:value` pairs separated by `|`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External URL for the item.
    #[serde(
        default,
        rename = "webViewLink",
        alias = "webLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub web_link: Option<String>,
}

impl RemoteItem {
    /// Whether this item is a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }

    /// The head of the parent list, if any.
    pub fn first_parent(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }

    /// Whether this item has at least one parent.
    pub fn has_parent(&self) -> bool {
        !self.parents.is_empty()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    /// Items on this page.
    #[serde(default, rename = "files", alias = "items")]
    pub items: Vec<RemoteItem>,
    /// Token for the next page; `None` on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ItemPage {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next_page_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// Trait for remote listing backends.
///
/// Implementations own authentication and transport. The
/// [`RemoteFileStore`] trait is defined here in `drivetree-core` and
/// implemented in `drivetree-storage`.
#[async_trait]
pub trait RemoteFileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "google", "memory").
    fn provider_type(&self) -> &str;

    /// Resolve the id of the store's designated root folder.
    async fn root_id(&self) -> AppResult<String>;

    /// Fetch one page of items. `None` requests the first page.
    async fn list_items(&self, page_token: Option<&str>) -> AppResult<ItemPage>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drive_page() {
        let json = r#"{
            "nextPageToken": "abc",
            "files": [
                {
                    "id": "f1",
                    "name": "Videos",
                    "mimeType": "application/vnd.google-apps.folder",
                    "parents": ["root-id"],
                    "webViewLink": "https://drive.example/f1"
                },
                { "id": "f2", "name": "orphan.txt", "mimeType": "text/plain" }
            ]
        }"#;

        let page: ItemPage = serde_json::from_str(json).expect("deserialize");
        assert!(page.has_next());
        assert_eq!(page.items.len(), 2);
        assert!(page.items[0].is_folder());
        assert_eq!(page.items[0].first_parent(), Some("root-id"));
        assert_eq!(
            page.items[0].web_link.as_deref(),
            Some("https://drive.example/f1")
        );
        assert!(!page.items[1].has_parent());
        assert_eq!(page.items[1].first_parent(), None);
    }

    #[test]
    fn test_empty_token_means_last_page() {
        let page = ItemPage {
            items: Vec::new(),
            next_page_token: Some(String::new()),
        };
        assert!(!page.has_next());
    }
}
