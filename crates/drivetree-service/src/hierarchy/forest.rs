//! Folder forest reconstruction.

use tracing::debug;

use drivetree_core::traits::RemoteItem;
use drivetree_entity::HierarchyNode;

use super::arena::FolderIndex;

/// Rebuild the folder hierarchy below `root_id` from a flat listing.
///
/// Only folders with at least one parent take part, and only their first
/// parent counts. Root-level folders are those whose first parent is
/// `root_id`, ordered by name with byte-wise `str` ordering; equal names
/// keep listing order. Children keep listing order, folders with
/// subfolders included; they are not moved after their leaf siblings.
/// Folders that cannot
/// be reached from `root_id` (dangling parent, detached cycle) are left
/// out.
pub fn build_folder_forest(items: &[RemoteItem], root_id: &str) -> Vec<HierarchyNode> {
    let index = FolderIndex::new(items);

    let mut roots = index.children_of(root_id).to_vec();
    roots.sort_by(|&a, &b| index.folder(a).name.cmp(&index.folder(b).name));

    let assembled = index.assemble(&roots, None, &[]);

    let unplaced = index.len() - assembled.placed;
    if unplaced > 0 {
        let dangling = (0..index.len())
            .map(|idx| index.folder(idx))
            .filter(|f| {
                f.first_parent()
                    .is_some_and(|p| p != root_id && !index.contains(p))
            })
            .count();
        debug!(
            unplaced,
            dangling, "Folders not reachable from the root were left out"
        );
    }

    assembled.nodes
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::hierarchy::test_support::{ROOT, file, folder};

    fn collect_ids(nodes: &[HierarchyNode], counts: &mut HashMap<String, usize>) {
        let mut stack: Vec<&HierarchyNode> = nodes.iter().collect();
        while let Some(node) = stack.pop() {
            *counts.entry(node.id.clone()).or_default() += 1;
            stack.extend(node.children());
        }
    }

    #[test]
    fn test_three_level_nesting() {
        let items = vec![
            folder("c", "C", &["b"]),
            folder("a", "A", &[ROOT]),
            folder("b", "B", &["a"]),
        ];

        let forest = build_folder_forest(&items, ROOT);

        assert_eq!(forest.len(), 1);
        let a = &forest[0];
        assert_eq!(a.id, "a");
        assert_eq!(a.children().len(), 1);
        let b = &a.children()[0];
        assert_eq!(b.id, "b");
        assert_eq!(b.children().len(), 1);
        let c = &b.children()[0];
        assert_eq!(c.id, "c");
        assert_eq!(c.children, Some(Vec::new()));
    }

    #[test]
    fn test_every_folder_appears_exactly_once() {
        let items = vec![
            folder("a", "Alpha", &[ROOT]),
            folder("b", "Beta", &[ROOT]),
            folder("a1", "Alpha 1", &["a"]),
            folder("a2", "Alpha 2", &["a"]),
            folder("a1x", "Alpha 1 x", &["a1"]),
            folder("a1y", "Alpha 1 y", &["a1"]),
            folder("a1xz", "Deep", &["a1x"]),
            folder("b1", "Beta 1", &["b"]),
            // a second parent is ignored
            folder("shared", "Shared", &["b1", "a2"]),
        ];

        let forest = build_folder_forest(&items, ROOT);

        let mut counts = HashMap::new();
        collect_ids(&forest, &mut counts);
        assert_eq!(counts.len(), items.len());
        assert!(counts.values().all(|&c| c == 1));
        assert_eq!(forest[0].depth(), 4);
    }

    #[test]
    fn test_root_order_is_stable_by_name() {
        let items = vec![
            folder("z", "Zeta", &[ROOT]),
            folder("m1", "Mid", &[ROOT]),
            folder("a", "Alpha", &[ROOT]),
            folder("m2", "Mid", &[ROOT]),
            folder("lower", "alpha", &[ROOT]),
        ];

        let forest = build_folder_forest(&items, ROOT);
        let ids: Vec<&str> = forest.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m1", "m2", "z", "lower"]);
    }

    #[test]
    fn test_children_keep_listing_order() {
        let items = vec![
            folder("p", "Parent", &[ROOT]),
            folder("c2", "Second", &["p"]),
            folder("c1", "First", &["p"]),
            folder("c1a", "Nested", &["c1"]),
        ];

        let forest = build_folder_forest(&items, ROOT);
        let ids: Vec<&str> = forest[0].children().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c1"]);
        assert_eq!(forest[0].children()[1].children()[0].id, "c1a");
    }

    #[test]
    fn test_excludes_files_orphans_and_dangling() {
        let items = vec![
            folder("a", "A", &[ROOT]),
            folder("orphan", "Orphan", &[]),
            folder("dangling", "Dangling", &["missing"]),
            folder("under-dangling", "Under", &["dangling"]),
            file("doc", "doc.pdf", "application/pdf", &["a"]),
            file("vid", "clip.mp4", "video/mp4", &[ROOT]),
        ];

        let forest = build_folder_forest(&items, ROOT);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, "a");
        assert!(forest[0].children().is_empty());
    }

    #[test]
    fn test_detached_cycle_is_left_out() {
        let items = vec![
            folder("a", "A", &[ROOT]),
            folder("x", "X", &["y"]),
            folder("y", "Y", &["x"]),
        ];

        let forest = build_folder_forest(&items, ROOT);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].subtree_size(), 1);
    }

    #[test]
    fn test_duplicate_listing_is_placed_once() {
        let items = vec![
            folder("a", "A", &[ROOT]),
            folder("b", "B", &["a"]),
            folder("b", "B", &["a"]),
        ];

        let forest = build_folder_forest(&items, ROOT);
        assert_eq!(forest[0].children().len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            folder("a", "A", &[ROOT]),
            folder("b", "B", &["a"]),
            folder("c", "C", &["b"]),
            folder("d", "D", &[ROOT]),
        ];

        assert_eq!(
            build_folder_forest(&items, ROOT),
            build_folder_forest(&items, ROOT)
        );
    }

    #[test]
    fn test_empty_listing() {
        assert!(build_folder_forest(&[], ROOT).is_empty());
    }

    #[test]
    fn test_serializes_for_tree_widget() {
        let items = vec![folder("a", "A", &[ROOT]), folder("b", "B", &["a"])];
        let forest = build_folder_forest(&items, ROOT);

        let json = serde_json::to_value(&forest).expect("serialize");
        assert_eq!(json[0]["id"], "a");
        assert_eq!(json[0]["checked"], false);
        assert_eq!(json[0]["children"][0]["id"], "b");
        assert_eq!(json[0]["children"][0]["children"], serde_json::json!([]));
    }
}
