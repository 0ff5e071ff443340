//! Drains a remote store into a flat item list.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use drivetree_core::error::{AppError, ErrorKind};
use drivetree_core::traits::{RemoteFileStore, RemoteItem};

/// A complete listing.
#[derive(Debug, Clone)]
pub struct FetchedItems {
    /// All items across all pages, in listing order.
    pub items: Vec<RemoteItem>,
    /// Number of pages fetched.
    pub pages: usize,
}

/// Pagination ended before the last page.
///
/// Carries whatever was received so the caller can decide between
/// failing and accepting a partial listing.
#[derive(Debug, Error)]
#[error("Listing stopped after {pages_fetched} page(s) and {} item(s): {source}", .items.len())]
pub struct PartialFetchError {
    /// Items received before the failure.
    pub items: Vec<RemoteItem>,
    /// Pages received before the failure.
    pub pages_fetched: usize,
    /// Why pagination stopped.
    #[source]
    pub source: AppError,
}

impl PartialFetchError {
    /// Accept the partial listing.
    pub fn into_partial(self) -> FetchedItems {
        FetchedItems {
            items: self.items,
            pages: self.pages_fetched,
        }
    }
}

impl From<PartialFetchError> for AppError {
    fn from(err: PartialFetchError) -> Self {
        AppError::with_source(ErrorKind::PartialFetch, err.to_string(), err)
    }
}

/// Fetch every page until the store stops returning a next-page token.
///
/// A failed page, a repeated page token, or more than `max_pages` pages
/// ends the loop with a [`PartialFetchError`].
pub async fn fetch_all(
    store: &dyn RemoteFileStore,
    max_pages: usize,
) -> Result<FetchedItems, PartialFetchError> {
    let mut items = Vec::new();
    let mut pages = 0usize;
    let mut token: Option<String> = None;
    let mut seen_tokens = HashSet::new();

    loop {
        let page = match store.list_items(token.as_deref()).await {
            Ok(page) => page,
            Err(source) => {
                warn!(
                    provider = store.provider_type(),
                    pages,
                    items = items.len(),
                    error = %source,
                    "Page fetch failed"
                );
                return Err(PartialFetchError {
                    items,
                    pages_fetched: pages,
                    source,
                });
            }
        };

        pages += 1;
        let has_next = page.has_next();
        items.extend(page.items);
        debug!(page = pages, total = items.len(), "Fetched page");

        if !has_next {
            break;
        }

        let next = page.next_page_token.unwrap_or_default();
        if !seen_tokens.insert(next.clone()) {
            return Err(PartialFetchError {
                items,
                pages_fetched: pages,
                source: AppError::external_service(format!("Page token '{next}' repeated")),
            });
        }
        if pages >= max_pages {
            return Err(PartialFetchError {
                items,
                pages_fetched: pages,
                source: AppError::external_service(format!(
                    "Listing exceeded {max_pages} page(s)"
                )),
            });
        }
        token = Some(next);
    }

    Ok(FetchedItems { items, pages })
}
