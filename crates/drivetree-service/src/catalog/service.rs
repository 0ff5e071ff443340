//! Catalog lifecycle and read views.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use drivetree_core::config::{ContentConfig, ContentFolderConfig, FetchConfig, FetchPolicy};
use drivetree_core::result::AppResult;
use drivetree_core::traits::RemoteFileStore;
use drivetree_entity::{ContentKind, HierarchyNode};
use drivetree_storage::fetch_all;

use super::snapshot::{CatalogSnapshot, CatalogStatus};
use crate::hierarchy::{build_folder_forest, classify_content, classify_each};

/// Holds the current listing snapshot and answers hierarchy and content
/// queries from it.
#[derive(Debug)]
pub struct CatalogService {
    /// Remote store.
    store: Arc<dyn RemoteFileStore>,
    /// Configured content folders.
    content: ContentConfig,
    /// Pagination policy.
    fetch: FetchConfig,
    /// Current snapshot, swapped whole on refresh.
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogService {
    /// Fetch the first snapshot and create the service.
    pub async fn load(
        store: Arc<dyn RemoteFileStore>,
        content: ContentConfig,
        fetch: FetchConfig,
    ) -> AppResult<Self> {
        let snapshot = fetch_snapshot(store.as_ref(), &content, &fetch).await?;
        Ok(Self {
            store,
            content,
            fetch,
            snapshot: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// Refetch the listing and replace the snapshot.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> AppResult<CatalogStatus> {
        let snapshot = fetch_snapshot(self.store.as_ref(), &self.content, &self.fetch).await?;
        let status = snapshot.status(self.store.provider_type());
        *self.snapshot.write().await = Arc::new(snapshot);
        Ok(status)
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Folder forest below the root, rebuilt from the current snapshot.
    pub async fn hierarchy(&self) -> Vec<HierarchyNode> {
        let snapshot = self.snapshot().await;
        build_folder_forest(&snapshot.items, &snapshot.root_id)
    }

    /// Non-video files in the content folders.
    pub async fn articles(&self) -> Vec<HierarchyNode> {
        self.snapshot().await.content_of(ContentKind::Article)
    }

    /// Video files in the content folders.
    pub async fn videos(&self) -> Vec<HierarchyNode> {
        self.snapshot().await.content_of(ContentKind::Video)
    }

    /// Child folder trees of every configured content folder. Names that
    /// do not resolve are skipped.
    pub async fn content_folders(&self) -> Vec<HierarchyNode> {
        let snapshot = self.snapshot().await;
        let mut nodes = Vec::new();
        for (name, result) in classify_each(&snapshot.items, &self.content.folders) {
            match result {
                Ok(children) => nodes.extend(children),
                Err(e) => warn!(folder = %name, error = %e, "Skipping content folder"),
            }
        }
        nodes
    }

    /// Immediate child folders of the named folder, without their
    /// subfolders.
    pub async fn child_folders(&self, name: &str) -> AppResult<Vec<HierarchyNode>> {
        let snapshot = self.snapshot().await;
        classify_content(&snapshot.items, &[ContentFolderConfig::new(name, false)])
    }

    /// Status of the current snapshot.
    pub async fn status(&self) -> CatalogStatus {
        self.snapshot().await.status(self.store.provider_type())
    }

    /// The remote store.
    pub fn store(&self) -> &Arc<dyn RemoteFileStore> {
        &self.store
    }
}

async fn fetch_snapshot(
    store: &dyn RemoteFileStore,
    content: &ContentConfig,
    fetch: &FetchConfig,
) -> AppResult<CatalogSnapshot> {
    let root_id = store.root_id().await?;

    let (fetched, partial) = match fetch_all(store, fetch.max_pages).await {
        Ok(fetched) => (fetched, false),
        Err(e) => match fetch.policy {
            FetchPolicy::Strict => return Err(e.into()),
            FetchPolicy::Lenient => {
                warn!(
                    pages = e.pages_fetched,
                    items = e.items.len(),
                    error = %e.source,
                    "Keeping partial listing"
                );
                (e.into_partial(), true)
            }
        },
    };

    let snapshot = CatalogSnapshot::new(root_id, fetched.items, fetched.pages, partial, content);
    info!(
        provider = store.provider_type(),
        root_id = %snapshot.root_id,
        items = snapshot.items.len(),
        pages = snapshot.pages,
        content = snapshot.content.len(),
        partial,
        "Catalog snapshot loaded"
    );
    Ok(snapshot)
}
