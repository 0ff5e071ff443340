//! Fetched listing snapshot and the content views derived from it.

pub mod service;
pub mod snapshot;

pub use service::CatalogService;
pub use snapshot::{CatalogSnapshot, CatalogStatus};
