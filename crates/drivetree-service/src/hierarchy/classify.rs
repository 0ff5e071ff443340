//! Content classification over configured folders.
//!
//! A configured folder is located by name; what lies below it is exposed
//! either as nested child folders ([`classify_content`]) or as a flat list
//! of the files it holds ([`collect_content`]).

use std::collections::HashSet;

use tracing::{debug, warn};

use drivetree_core::config::ContentFolderConfig;
use drivetree_core::error::AppError;
use drivetree_core::result::AppResult;
use drivetree_core::traits::RemoteItem;
use drivetree_entity::{HierarchyNode, to_hierarchy_node};

use super::arena::FolderIndex;

/// Find a folder item by case-insensitive name.
///
/// Names are compared after Unicode lowercasing. The first match in
/// listing order wins.
pub fn resolve_folder<'a>(items: &'a [RemoteItem], name: &str) -> AppResult<&'a RemoteItem> {
    let wanted = name.to_lowercase();
    let mut matches = items
        .iter()
        .filter(|i| i.is_folder() && i.name.to_lowercase() == wanted);

    let first = matches
        .next()
        .ok_or_else(|| AppError::not_found(format!("Folder '{name}' not found")))?;

    let others = matches.count();
    if others > 0 {
        warn!(
            folder = name,
            chosen = %first.id,
            duplicates = others,
            "Several folders share this name, using the first"
        );
    }
    Ok(first)
}

/// Immediate child folders of every configured folder, in configuration
/// order.
///
/// Fails on the first name that does not resolve.
pub fn classify_content(
    items: &[RemoteItem],
    folders: &[ContentFolderConfig],
) -> AppResult<Vec<HierarchyNode>> {
    let index = FolderIndex::new(items);
    let mut nodes = Vec::new();
    for config in folders {
        nodes.extend(classify_one(&index, items, config)?);
    }
    Ok(nodes)
}

/// Like [`classify_content`], but resolves each configured folder on its
/// own so one bad name does not hide the others.
pub fn classify_each(
    items: &[RemoteItem],
    folders: &[ContentFolderConfig],
) -> Vec<(String, AppResult<Vec<HierarchyNode>>)> {
    let index = FolderIndex::new(items);
    folders
        .iter()
        .map(|config| (config.name.clone(), classify_one(&index, items, config)))
        .collect()
}

/// Files inside every configured folder, and inside its subfolders when
/// `include_subfolders` is set.
///
/// An item reachable through several folders is listed once, at its first
/// occurrence.
pub fn collect_content(
    items: &[RemoteItem],
    folders: &[ContentFolderConfig],
) -> AppResult<Vec<HierarchyNode>> {
    let index = FolderIndex::new(items);
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    for config in folders {
        nodes.extend(collect_one(&index, items, config, &mut seen)?);
    }
    Ok(nodes)
}

/// Per-folder variant of [`collect_content`]. Deduplication still spans
/// all folders.
pub fn collect_content_each(
    items: &[RemoteItem],
    folders: &[ContentFolderConfig],
) -> Vec<(String, AppResult<Vec<HierarchyNode>>)> {
    let index = FolderIndex::new(items);
    let mut seen = HashSet::new();
    folders
        .iter()
        .map(|config| {
            (
                config.name.clone(),
                collect_one(&index, items, config, &mut seen),
            )
        })
        .collect()
}

fn classify_one(
    index: &FolderIndex<'_>,
    items: &[RemoteItem],
    config: &ContentFolderConfig,
) -> AppResult<Vec<HierarchyNode>> {
    let folder = resolve_folder(items, &config.name)?;
    let roots = index.children_of(&folder.id);
    let depth_limit = (!config.include_subfolders).then_some(1);
    let exclude: Vec<usize> = index.position(&folder.id).into_iter().collect();

    let assembled = index.assemble(roots, depth_limit, &exclude);
    debug!(
        folder = %config.name,
        children = assembled.nodes.len(),
        placed = assembled.placed,
        "Classified content folder"
    );
    Ok(assembled.nodes)
}

fn collect_one<'a>(
    index: &FolderIndex<'a>,
    items: &'a [RemoteItem],
    config: &ContentFolderConfig,
    seen: &mut HashSet<&'a str>,
) -> AppResult<Vec<HierarchyNode>> {
    let folder = resolve_folder(items, &config.name)?;

    let mut scope: HashSet<&str> = HashSet::from([folder.id.as_str()]);
    if config.include_subfolders {
        scope.extend(index.descendant_ids(&folder.id));
    }

    let nodes: Vec<HierarchyNode> = items
        .iter()
        .filter(|i| !i.is_folder())
        .filter(|i| i.first_parent().is_some_and(|p| scope.contains(p)))
        .filter(|i| seen.insert(i.id.as_str()))
        .map(to_hierarchy_node)
        .collect();

    debug!(
        folder = %config.name,
        folders = scope.len(),
        items = nodes.len(),
        "Collected content"
    );
    Ok(nodes)
}
