//! Google Drive v3 store.
//!
//! Credentials are treated as opaque: either a pre-issued access token, or
//! a refresh token exchanged at the OAuth2 token endpoint whenever the
//! cached access token is about to expire. A request rejected with 401 is
//! retried once with a freshly exchanged token when refresh credentials
//! are configured.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use drivetree_core::config::GoogleDriveConfig;
use drivetree_core::error::{AppError, ErrorKind};
use drivetree_core::result::AppResult;
use drivetree_core::traits::{ItemPage, RemoteFileStore};

/// Fields requested for every listed item.
const LIST_FIELDS: &str = "nextPageToken, files(id, name, webViewLink, description, mimeType, parents)";
/// Alias the Drive API resolves to the user's root folder.
const ROOT_ALIAS: &str = "root";
/// Re-exchange the token this long before it expires.
const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Google Drive store using the REST API directly.
#[derive(Debug)]
pub struct GoogleDriveStore {
    client: reqwest::Client,
    config: GoogleDriveConfig,
    token: Mutex<Option<CachedToken>>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                expires_at - chrono::Duration::seconds(TOKEN_EXPIRY_MARGIN_SECONDS) > now
            }
            None => true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RootResponse {
    id: String,
}

impl GoogleDriveStore {
    /// Create a new Google Drive store.
    pub fn new(config: GoogleDriveConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.app_name.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build HTTP client",
                    e,
                )
            })?;

        let token = (!config.access_token.is_empty()).then(|| CachedToken {
            access_token: config.access_token.clone(),
            expires_at: None,
        });

        Ok(Self {
            client,
            config,
            token: Mutex::new(token),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base.trim_end_matches('/'), path)
    }

    /// Return a usable access token, exchanging the refresh token when the
    /// cached one is missing or about to expire.
    async fn access_token(&self) -> AppResult<String> {
        let mut cached = self.token.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref() {
            if token.is_fresh(now) || !self.config.can_refresh() {
                return Ok(token.access_token.clone());
            }
        }

        if !self.config.can_refresh() {
            return Err(AppError::configuration(
                "No access token configured and no refresh credentials available",
            ));
        }

        let token = self.exchange_refresh_token(now).await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    /// Drop the cached token if it is still the one that was rejected.
    async fn invalidate_token(&self, rejected: &str) {
        let mut cached = self.token.lock().await;
        if cached
            .as_ref()
            .is_some_and(|token| token.access_token == rejected)
        {
            *cached = None;
        }
    }

    /// Send an authorized request, retrying once with a new token on 401.
    async fn send_authorized<F>(&self, operation: &str, build: F) -> AppResult<Response>
    where
        F: Fn(String) -> RequestBuilder,
    {
        let token = self.access_token().await?;
        let response = build(token.clone())
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        if response.status() != StatusCode::UNAUTHORIZED || !self.config.can_refresh() {
            return ensure_success(operation, response).await;
        }

        warn!(operation, "Drive rejected the access token, exchanging refresh token");
        self.invalidate_token(&token).await;
        let token = self.access_token().await?;
        let response = build(token)
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;
        ensure_success(operation, response).await
    }

    async fn exchange_refresh_token(&self, now: DateTime<Utc>) -> AppResult<CachedToken> {
        debug!(token_url = %self.config.token_url, "Exchanging refresh token");

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("refresh_token", self.config.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| transport_error("token exchange", e))?;
        let response = ensure_success("token exchange", response).await?;

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| transport_error("token exchange", e))?;

        Ok(CachedToken {
            access_token: body.access_token,
            expires_at: body
                .expires_in
                .map(|seconds| now + chrono::Duration::seconds(seconds)),
        })
    }
}

#[async_trait]
impl RemoteFileStore for GoogleDriveStore {
    fn provider_type(&self) -> &str {
        "google"
    }

    async fn root_id(&self) -> AppResult<String> {
        let url = self.url(&format!("files/{ROOT_ALIAS}"));
        let response = self
            .send_authorized("root lookup", |token| {
                self.client
                    .get(&url)
                    .bearer_auth(token)
                    .query(&[("fields", "id")])
            })
            .await?;

        let root: RootResponse = response
            .json()
            .await
            .map_err(|e| transport_error("root lookup", e))?;
        Ok(root.id)
    }

    async fn list_items(&self, page_token: Option<&str>) -> AppResult<ItemPage> {
        let url = self.url("files");
        let page_size = self.config.page_size.to_string();

        let response = self
            .send_authorized("file listing", |token| {
                let request = self.client.get(&url).bearer_auth(token).query(&[
                    ("q", self.config.query.as_str()),
                    ("fields", LIST_FIELDS),
                    ("pageSize", page_size.as_str()),
                ]);
                match page_token {
                    Some(page_token) => request.query(&[("pageToken", page_token)]),
                    None => request,
                }
            })
            .await?;

        let page: ItemPage = response
            .json()
            .await
            .map_err(|e| transport_error("file listing", e))?;
        debug!(
            items = page.items.len(),
            has_next = page.has_next(),
            "Fetched Drive page"
        );
        Ok(page)
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.root_id().await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(error = %e, "Drive health check failed");
                Ok(false)
            }
        }
    }
}

fn transport_error(operation: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Drive {operation} failed: {err}"),
        err,
    )
}

async fn ensure_success(operation: &str, response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::external_service(format!(
        "Drive {operation} returned {status}: {}",
        body.trim()
    )))
}
