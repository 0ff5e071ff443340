//! Table, tree and JSON output formatting for CLI commands.

use std::fmt::Write;

use serde::Serialize;
use tabled::{Table, Tabled};

use drivetree_entity::HierarchyNode;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// One content entry as a table row
#[derive(Debug, Serialize, Tabled)]
pub struct ContentRow {
    /// Item id
    #[tabled(rename = "ID")]
    pub id: String,
    /// Display title
    #[tabled(rename = "Title")]
    pub title: String,
    /// Kind
    #[tabled(rename = "Kind")]
    pub kind: String,
    /// Comma-separated tags
    #[tabled(rename = "Tags")]
    pub tags: String,
    /// Link
    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&HierarchyNode> for ContentRow {
    fn from(node: &HierarchyNode) -> Self {
        Self {
            id: node.id.clone(),
            title: node.title.clone(),
            kind: format!("{:?}", node.kind()).to_lowercase(),
            tags: node.tags.join(", "),
            url: node.url.clone().unwrap_or_default(),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Render a folder forest as an indented outline, one folder per line.
///
/// `max_depth` of 1 prints only the root-level folders.
pub fn render_tree(forest: &[HierarchyNode], max_depth: Option<usize>) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&HierarchyNode, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, level)) = stack.pop() {
        let _ = writeln!(out, "{}{} ({})", "  ".repeat(level), node.title, node.id);
        if max_depth.is_none_or(|max| level + 1 < max) {
            stack.extend(node.children().iter().rev().map(|c| (c, level + 1)));
        }
    }
    out
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use drivetree_core::traits::{FOLDER_MIME_TYPE, RemoteItem};
    use drivetree_entity::to_hierarchy_node;

    use super::*;

    fn node(id: &str, name: &str, mime: &str) -> HierarchyNode {
        to_hierarchy_node(&RemoteItem {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: mime.to_string(),
            parents: vec!["root".to_string()],
            description: None,
            web_link: None,
        })
    }

    fn forest() -> Vec<HierarchyNode> {
        let mut docs = node("d", "Docs", FOLDER_MIME_TYPE);
        let mut guides = node("g", "Guides", FOLDER_MIME_TYPE);
        guides.children = Some(vec![node("o", "Old", FOLDER_MIME_TYPE)]);
        docs.children = Some(vec![guides]);
        vec![docs, node("m", "Media", FOLDER_MIME_TYPE)]
    }

    #[test]
    fn test_render_full_tree() {
        let rendered = render_tree(&forest(), None);
        assert_eq!(
            rendered,
            "Docs (d)\n  Guides (g)\n    Old (o)\nMedia (m)\n"
        );
    }

    #[test]
    fn test_render_depth_limited() {
        let rendered = render_tree(&forest(), Some(2));
        assert_eq!(rendered, "Docs (d)\n  Guides (g)\nMedia (m)\n");
    }

    #[test]
    fn test_content_row() {
        let row = ContentRow::from(&node("v", "clip.mp4", "video/mp4"));
        assert_eq!(row.kind, "video");
        assert_eq!(row.title, "clip.mp4");
        assert_eq!(row.url, "");
    }
}
