//! Request timeout layer.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;

/// Builds a layer that answers `408` once a request exceeds `seconds`.
pub fn build_timeout_layer(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(seconds))
}
