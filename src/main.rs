//! DriveTree Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use drivetree_core::config::AppConfig;
use drivetree_core::error::AppError;
use drivetree_service::CatalogService;
use drivetree_storage::build_store;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
///
/// `DRIVETREE_CONFIG` names a single file; otherwise `config/default.toml`
/// is overlaid with `config/{DRIVETREE_ENV}.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("DRIVETREE_CONFIG") {
        return AppConfig::load_file(&path);
    }

    let env = std::env::var("DRIVETREE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DriveTree v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Remote store ─────────────────────────────────────
    tracing::info!(
        "Initializing remote store (provider: {})...",
        config.drive.provider.as_str()
    );
    let store = build_store(&config.drive).await?;

    // ── Step 2: First snapshot ───────────────────────────────────
    let catalog = CatalogService::load(
        store,
        config.content.clone(),
        config.drive.fetch.clone(),
    )
    .await?;
    let catalog = Arc::new(catalog);

    let status = catalog.status().await;
    tracing::info!(
        items = status.item_count,
        folders = status.folder_count,
        content = status.content_count,
        "Catalog ready"
    );
    for name in &status.unresolved_folders {
        tracing::warn!(folder = %name, "Configured content folder not found");
    }

    // ── Step 3: HTTP server ──────────────────────────────────────
    drivetree_api::run_server(config, catalog).await?;

    tracing::info!("DriveTree server shut down gracefully");
    Ok(())
}
