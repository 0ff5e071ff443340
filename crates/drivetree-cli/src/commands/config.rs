//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use drivetree_core::config::{AppConfig, DriveProvider};
use drivetree_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration with secrets masked
    Show,
    /// Validate configuration file
    Check,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&masked(config), format);
        }
        ConfigCommand::Check => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv(
                    "Server",
                    &format!("{}:{}", config.server.host, config.server.port),
                );
                output::print_kv("Provider", config.drive.provider.as_str());
                if config.drive.provider == DriveProvider::Fixture {
                    output::print_kv("Fixture", &config.drive.fixture.path);
                }
                let folders: Vec<&str> = config
                    .content
                    .folders
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect();
                output::print_kv("Content folders", &folders.join(", "));
                output::print_kv("Logging", &config.logging.level);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Replace credentials with a placeholder for display.
fn masked(mut config: AppConfig) -> AppConfig {
    let google = &mut config.drive.google;
    for secret in [
        &mut google.access_token,
        &mut google.refresh_token,
        &mut google.client_secret,
    ] {
        if !secret.is_empty() {
            *secret = "****".to_string();
        }
    }
    config
}
