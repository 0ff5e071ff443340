//! Remote file store providers.

pub mod google;
pub mod memory;

use std::sync::Arc;

use drivetree_core::config::{DriveConfig, DriveProvider};
use drivetree_core::result::AppResult;
use drivetree_core::traits::RemoteFileStore;

pub use google::GoogleDriveStore;
pub use memory::MemoryStore;

/// Build the store selected by `drive.provider`.
pub async fn build_store(config: &DriveConfig) -> AppResult<Arc<dyn RemoteFileStore>> {
    let store: Arc<dyn RemoteFileStore> = match config.provider {
        DriveProvider::Google => Arc::new(GoogleDriveStore::new(config.google.clone())?),
        DriveProvider::Fixture => Arc::new(
            MemoryStore::from_fixture_file(&config.fixture.path)
                .await?
                .with_page_size(config.fixture.page_size),
        ),
    };

    tracing::info!(provider = store.provider_type(), "Remote file store ready");
    Ok(store)
}
