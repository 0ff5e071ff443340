//! Content folder selection.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Folders scanned for articles and videos.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct ContentConfig {
    /// Ordered list of folder names to scan.
    #[serde(default)]
    #[validate(nested)]
    pub folders: Vec<ContentFolderConfig>,
}

/// One configured content folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContentFolderConfig {
    /// Folder name, matched case-insensitively.
    #[validate(length(min = 1, message = "content folder name must not be empty"))]
    pub name: String,
    /// Whether to descend into subfolders.
    #[serde(default = "default_true")]
    pub include_subfolders: bool,
}

impl ContentFolderConfig {
    /// Create a content folder entry.
    pub fn new(name: impl Into<String>, include_subfolders: bool) -> Self {
        Self {
            name: name.into(),
            include_subfolders,
        }
    }
}

fn default_true() -> bool {
    true
}
