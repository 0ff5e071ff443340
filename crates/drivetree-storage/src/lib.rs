//! # drivetree-storage
//!
//! Remote file store implementations for DriveTree. Supports Google Drive
//! over HTTPS and an in-memory store loaded from JSON fixtures, plus the
//! pagination loop that drains a store into a flat item list.

pub mod fetch;
pub mod providers;

pub use fetch::{FetchedItems, PartialFetchError, fetch_all};
pub use providers::{GoogleDriveStore, MemoryStore, build_store};
