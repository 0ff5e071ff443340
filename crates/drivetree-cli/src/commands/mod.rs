//! CLI command definitions and dispatch.

pub mod config;
pub mod content;
pub mod serve;
pub mod status;
pub mod tree;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use drivetree_core::config::AppConfig;
use drivetree_core::error::AppError;
use drivetree_service::CatalogService;
use drivetree_storage::build_store;

use crate::output::OutputFormat;

/// DriveTree: remote drive listings as folder trees
#[derive(Debug, Parser)]
#[command(name = "drivetree", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the DriveTree server
    Serve(serve::ServeArgs),
    /// Print the folder hierarchy
    Tree(tree::TreeArgs),
    /// List articles, videos or content folders
    Content(content::ContentArgs),
    /// Show catalog status after a fresh fetch
    Status,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Tree(args) => tree::execute(args, &self.config, self.format).await,
            Commands::Content(args) => content::execute(args, &self.config, self.format).await,
            Commands::Status => status::execute(&self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: build the configured store and fetch a catalog snapshot
pub async fn load_catalog(config: &AppConfig) -> Result<CatalogService, AppError> {
    let store = build_store(&config.drive).await?;
    CatalogService::load(store, config.content.clone(), config.drive.fetch.clone()).await
}

/// Helper: [`load_catalog`] behind an `Arc` for the server
pub async fn load_shared_catalog(config: &AppConfig) -> Result<Arc<CatalogService>, AppError> {
    Ok(Arc::new(load_catalog(config).await?))
}
