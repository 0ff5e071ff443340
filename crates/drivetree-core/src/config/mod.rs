//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod content;
pub mod drive;
pub mod logging;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::content::{ContentConfig, ContentFolderConfig};
pub use self::drive::{
    DriveConfig, DriveProvider, FetchConfig, FetchPolicy, FixtureConfig, GoogleDriveConfig,
};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`DRIVETREE__SERVER__PORT=9000`).
const ENV_PREFIX: &str = "DRIVETREE";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    /// Remote file store settings.
    #[serde(default)]
    #[validate(nested)]
    pub drive: DriveConfig,
    /// Content folder selection.
    #[serde(default)]
    #[validate(nested)]
    pub content: ContentConfig,
    /// Logging settings.
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `DRIVETREE__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::finish(config)
    }

    /// Load configuration from a single explicit file plus environment
    /// variable overrides.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to read '{path}': {e}")))?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<Self, AppError> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        parsed.check()?;
        Ok(parsed)
    }

    /// Validate field rules and cross-section constraints.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        match self.drive.provider {
            DriveProvider::Google if !self.drive.google.has_credentials() => {
                return Err(AppError::configuration(
                    "drive.google needs an access_token or refresh_token + client_id + client_secret",
                ));
            }
            DriveProvider::Fixture if self.drive.fixture.path.trim().is_empty() => {
                return Err(AppError::configuration(
                    "drive.fixture.path is required when drive.provider = \"fixture\"",
                ));
            }
            _ => {}
        }

        let mut seen = HashSet::new();
        for folder in &self.content.folders {
            if !seen.insert(folder.name.to_lowercase()) {
                return Err(AppError::configuration(format!(
                    "content folder '{}' is listed more than once",
                    folder.name
                )));
            }
        }

        Ok(())
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
