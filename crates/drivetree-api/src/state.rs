//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use drivetree_core::config::AppConfig;
use drivetree_service::CatalogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Listing snapshot and content views
    pub catalog: Arc<CatalogService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state from a loaded catalog.
    pub fn new(config: Arc<AppConfig>, catalog: Arc<CatalogService>) -> Self {
        Self {
            config,
            catalog,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
