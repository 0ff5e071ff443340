//! Folder hierarchy command.

use clap::Args;

use drivetree_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Only print this many levels
    #[arg(short, long)]
    pub depth: Option<usize>,
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config).await?;
    let forest = catalog.hierarchy().await;

    match format {
        OutputFormat::Json => output::print_item(&forest, format),
        OutputFormat::Table => {
            if forest.is_empty() {
                println!("No folders found.");
            } else {
                print!("{}", output::render_tree(&forest, args.depth));
            }
        }
    }

    Ok(())
}
