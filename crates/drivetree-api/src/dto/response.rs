//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthResponse {
    /// Overall status (`ok` or `degraded`).
    pub status: String,
    /// Remote store provider.
    pub provider: String,
    /// Remote store reachability.
    pub remote_store: String,
    /// Items in the current snapshot.
    pub item_count: usize,
    /// Folders in the current snapshot.
    pub folder_count: usize,
    /// Whether the snapshot is incomplete.
    pub partial: bool,
    /// When the snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
    /// Configured content folders that matched nothing.
    pub unresolved_folders: Vec<String>,
    /// Uptime.
    pub uptime_seconds: u64,
}
