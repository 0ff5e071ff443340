//! # drivetree-service
//!
//! Business logic for DriveTree. The [`hierarchy`] module turns a flat
//! remote listing into nested folder nodes and content lists; the
//! [`catalog`] module owns the fetched snapshot and serves both to the
//! API layer.
//!
//! Services follow constructor injection: the remote store is provided
//! at construction time as an `Arc<dyn RemoteFileStore>`.

pub mod catalog;
pub mod hierarchy;

pub use catalog::{CatalogService, CatalogSnapshot, CatalogStatus};
pub use hierarchy::{
    build_folder_forest, classify_content, classify_each, collect_content, collect_content_each,
    resolve_folder,
};
