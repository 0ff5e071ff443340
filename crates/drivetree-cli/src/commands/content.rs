//! Content listing commands.

use clap::{Args, Subcommand};

use drivetree_core::error::AppError;

use crate::output::{self, ContentRow, OutputFormat};

/// Arguments for content commands
#[derive(Debug, Args)]
pub struct ContentArgs {
    /// Content subcommand
    #[command(subcommand)]
    pub command: ContentCommand,
}

/// Content subcommands
#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Files in the content folders that are not videos
    Articles,
    /// Video files in the content folders
    Videos,
    /// Child folders of the content folders
    Folders,
    /// Immediate child folders of a folder, looked up by name
    Children {
        /// Folder name (case-insensitive)
        name: String,
    },
}

/// Execute content commands
pub async fn execute(
    args: &ContentArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config).await?;

    let nodes = match &args.command {
        ContentCommand::Articles => catalog.articles().await,
        ContentCommand::Videos => catalog.videos().await,
        ContentCommand::Folders => catalog.content_folders().await,
        ContentCommand::Children { name } => catalog.child_folders(name).await?,
    };

    match format {
        OutputFormat::Json => output::print_item(&nodes, format),
        OutputFormat::Table => {
            let rows: Vec<ContentRow> = nodes.iter().map(ContentRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    let unresolved = catalog.status().await.unresolved_folders;
    for name in unresolved {
        output::print_warning(&format!("Content folder '{name}' not found"));
    }

    Ok(())
}
