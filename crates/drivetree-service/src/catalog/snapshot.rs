//! Point-in-time listing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use drivetree_core::config::ContentConfig;
use drivetree_core::traits::RemoteItem;
use drivetree_entity::{ContentKind, HierarchyNode};

use crate::hierarchy::collect_content_each;

/// The item list fetched at one point in time, plus the content derived
/// from it.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Designated root folder id.
    pub root_id: String,
    /// Flat listing in fetch order.
    pub items: Vec<RemoteItem>,
    /// Pages fetched.
    pub pages: usize,
    /// Whether pagination stopped early and the listing was kept anyway.
    pub partial: bool,
    /// When the listing was fetched.
    pub fetched_at: DateTime<Utc>,
    /// Files found in the configured content folders.
    pub content: Vec<HierarchyNode>,
    /// Configured content folders that matched no folder.
    pub unresolved_folders: Vec<String>,
}

/// Summary of the current snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatus {
    /// Remote store provider.
    pub provider: String,
    /// Designated root folder id.
    pub root_id: String,
    /// Total listed items.
    pub item_count: usize,
    /// Listed folders.
    pub folder_count: usize,
    /// Files in the configured content folders.
    pub content_count: usize,
    /// Pages fetched.
    pub pages: usize,
    /// Whether the listing is incomplete.
    pub partial: bool,
    /// When the listing was fetched.
    pub fetched_at: DateTime<Utc>,
    /// Configured content folders that matched no folder.
    pub unresolved_folders: Vec<String>,
}

impl CatalogSnapshot {
    /// Build a snapshot and collect content for the configured folders.
    ///
    /// A folder name that does not resolve is recorded in
    /// `unresolved_folders` rather than failing the snapshot.
    pub fn new(
        root_id: String,
        items: Vec<RemoteItem>,
        pages: usize,
        partial: bool,
        content_config: &ContentConfig,
    ) -> Self {
        let mut content = Vec::new();
        let mut unresolved_folders = Vec::new();

        for (name, result) in collect_content_each(&items, &content_config.folders) {
            match result {
                Ok(nodes) => content.extend(nodes),
                Err(e) => {
                    warn!(folder = %name, error = %e, "Content folder not resolved");
                    unresolved_folders.push(name);
                }
            }
        }

        Self {
            root_id,
            items,
            pages,
            partial,
            fetched_at: Utc::now(),
            content,
            unresolved_folders,
        }
    }

    /// Content entries of the given kind.
    pub fn content_of(&self, kind: ContentKind) -> Vec<HierarchyNode> {
        self.content
            .iter()
            .filter(|node| node.kind() == kind)
            .cloned()
            .collect()
    }

    /// Number of folder items.
    pub fn folder_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_folder()).count()
    }

    /// Status summary for the given provider.
    pub fn status(&self, provider: &str) -> CatalogStatus {
        CatalogStatus {
            provider: provider.to_string(),
            root_id: self.root_id.clone(),
            item_count: self.items.len(),
            folder_count: self.folder_count(),
            content_count: self.content.len(),
            pages: self.pages,
            partial: self.partial,
            fetched_at: self.fetched_at,
            unresolved_folders: self.unresolved_folders.clone(),
        }
    }
}
