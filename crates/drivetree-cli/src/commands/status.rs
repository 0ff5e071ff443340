//! Catalog status command.

use drivetree_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Execute the status command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config).await?;
    let status = catalog.status().await;

    match format {
        OutputFormat::Json => output::print_item(&status, format),
        OutputFormat::Table => {
            output::print_kv("Provider", &status.provider);
            output::print_kv("Root", &status.root_id);
            output::print_kv("Items", &status.item_count.to_string());
            output::print_kv("Folders", &status.folder_count.to_string());
            output::print_kv("Content", &status.content_count.to_string());
            output::print_kv("Pages", &status.pages.to_string());
            output::print_kv("Fetched", &status.fetched_at.to_rfc3339());
            if status.partial {
                output::print_warning("Listing is partial");
            }
            for name in &status.unresolved_folders {
                output::print_warning(&format!("Content folder '{name}' not found"));
            }
        }
    }

    Ok(())
}
