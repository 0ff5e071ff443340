//! Remote file store configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which [`RemoteFileStore`](crate::traits::RemoteFileStore) backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DriveProvider {
    /// Google Drive v3 over HTTPS.
    #[default]
    Google,
    /// A JSON fixture file served from memory.
    Fixture,
}

impl DriveProvider {
    /// Return the provider as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Fixture => "fixture",
        }
    }
}

/// Top-level remote store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct DriveConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: DriveProvider,
    /// Google Drive settings (used when `provider = "google"`).
    #[serde(default)]
    #[validate(nested)]
    pub google: GoogleDriveConfig,
    /// Fixture settings (used when `provider = "fixture"`).
    #[serde(default)]
    pub fixture: FixtureConfig,
    /// Pagination behavior.
    #[serde(default)]
    #[validate(nested)]
    pub fetch: FetchConfig,
}

/// Google Drive API credentials and endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoogleDriveConfig {
    /// Application name sent as the user agent.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Drive v3 API base URL.
    #[serde(default = "default_api_base")]
    #[validate(url)]
    pub api_base: String,
    /// OAuth2 token endpoint used for refresh-token exchange.
    #[serde(default = "default_token_url")]
    #[validate(url)]
    pub token_url: String,
    /// A pre-issued access token.
    #[serde(default)]
    pub access_token: String,
    /// Refresh token used to mint new access tokens.
    #[serde(default)]
    pub refresh_token: String,
    /// OAuth2 client id.
    #[serde(default)]
    pub client_id: String,
    /// OAuth2 client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Listing query.
    #[serde(default = "default_query")]
    pub query: String,
    /// Items requested per page.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000))]
    pub page_size: u32,
    /// HTTP client timeout in seconds.
    #[serde(default = "default_timeout")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

impl GoogleDriveConfig {
    /// Whether a refresh-token exchange is possible.
    pub fn can_refresh(&self) -> bool {
        !self.refresh_token.is_empty()
            && !self.client_id.is_empty()
            && !self.client_secret.is_empty()
    }

    /// Whether any usable credential is configured.
    pub fn has_credentials(&self) -> bool {
        !self.access_token.is_empty() || self.can_refresh()
    }
}

impl Default for GoogleDriveConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            api_base: default_api_base(),
            token_url: default_token_url(),
            access_token: String::new(),
            refresh_token: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            query: default_query(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Fixture-backed store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FixtureConfig {
    /// Path to a JSON file of the form `{ "rootId": ..., "items": [...] }`.
    #[serde(default)]
    pub path: String,
    /// Items per simulated page (0 = everything on one page).
    #[serde(default)]
    pub page_size: usize,
}

/// What to do when a page fetch fails part-way through a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchPolicy {
    /// Fail the load or refresh.
    #[default]
    Strict,
    /// Keep the pages received so far and flag the snapshot as partial.
    Lenient,
}

/// Pagination configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FetchConfig {
    /// Partial-result policy.
    #[serde(default)]
    pub policy: FetchPolicy,
    /// Upper bound on pages per listing.
    #[serde(default = "default_max_pages")]
    #[validate(range(min = 1))]
    pub max_pages: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            policy: FetchPolicy::default(),
            max_pages: default_max_pages(),
        }
    }
}

fn default_app_name() -> String {
    "drivetree".to_string()
}

fn default_api_base() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_query() -> String {
    "trashed=false".to_string()
}

fn default_page_size() -> u32 {
    1000
}

fn default_timeout() -> u64 {
    30
}

fn default_max_pages() -> usize {
    500
}
