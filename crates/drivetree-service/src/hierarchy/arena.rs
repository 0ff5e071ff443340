//! Folder index and iterative tree assembly shared by the forest and
//! content builders.

use std::collections::HashMap;

use drivetree_core::traits::RemoteItem;
use drivetree_entity::{HierarchyNode, to_hierarchy_node};

/// Folders with at least one parent, indexed by id and by first parent.
#[derive(Debug)]
pub(crate) struct FolderIndex<'a> {
    folders: Vec<&'a RemoteItem>,
    by_id: HashMap<&'a str, usize>,
    children: HashMap<&'a str, Vec<usize>>,
}

/// Result of one assembly pass.
#[derive(Debug)]
pub(crate) struct Assembled {
    /// Top-level nodes, in the order their indices were given.
    pub nodes: Vec<HierarchyNode>,
    /// Number of folders placed anywhere in `nodes`.
    pub placed: usize,
}

impl<'a> FolderIndex<'a> {
    /// Index the folder items of a listing. Child lists keep input order.
    pub fn new(items: &'a [RemoteItem]) -> Self {
        let mut folders = Vec::new();
        let mut by_id = HashMap::new();
        let mut children: HashMap<&str, Vec<usize>> = HashMap::new();

        for item in items.iter().filter(|i| i.is_folder()) {
            let Some(parent) = item.first_parent() else {
                continue;
            };
            if by_id.contains_key(item.id.as_str()) {
                continue;
            }

            let idx = folders.len();
            folders.push(item);
            by_id.insert(item.id.as_str(), idx);
            children.entry(parent).or_default().push(idx);
        }

        Self {
            folders,
            by_id,
            children,
        }
    }

    /// Number of indexed folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// The folder at `idx`.
    pub fn folder(&self, idx: usize) -> &'a RemoteItem {
        self.folders[idx]
    }

    /// Index of the folder with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Whether a folder with this id is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Indices of folders whose first parent is `parent_id`.
    pub fn children_of(&self, parent_id: &str) -> &[usize] {
        self.children
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ids of every folder below `id`, breadth first, excluding `id`.
    pub fn descendant_ids(&self, id: &'a str) -> Vec<&'a str> {
        let mut visited = vec![false; self.folders.len()];
        if let Some(own) = self.position(id) {
            visited[own] = true;
        }

        let mut out = Vec::new();
        let mut queue = std::collections::VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for &child in self.children_of(current) {
                if !visited[child] {
                    visited[child] = true;
                    let child_id = self.folders[child].id.as_str();
                    out.push(child_id);
                    queue.push_back(child_id);
                }
            }
        }
        out
    }

    /// Build nested nodes below each of `roots`.
    ///
    /// Walks depth-first with an explicit stack; every folder is placed at
    /// most once, so parent cycles cannot grow the tree. `depth_limit`
    /// caps how many levels get nodes (1 = only the roots themselves);
    /// indices in `exclude` are never placed.
    pub fn assemble(
        &self,
        roots: &[usize],
        depth_limit: Option<usize>,
        exclude: &[usize],
    ) -> Assembled {
        let n = self.folders.len();
        let mut visited = vec![false; n];
        for &idx in exclude {
            visited[idx] = true;
        }

        let mut preorder = Vec::new();
        let mut top = Vec::new();
        let mut claimed: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut stack: Vec<(usize, Option<usize>, usize)> =
            roots.iter().rev().map(|&idx| (idx, None, 1)).collect();

        while let Some((idx, parent, depth)) = stack.pop() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            preorder.push(idx);
            match parent {
                Some(p) => claimed[p].push(idx),
                None => top.push(idx),
            }

            if depth_limit.is_none_or(|limit| depth < limit) {
                let id = self.folders[idx].id.as_str();
                for &child in self.children_of(id).iter().rev() {
                    if !visited[child] {
                        stack.push((child, Some(idx), depth + 1));
                    }
                }
            }
        }

        // Reverse preorder finishes every child before its parent.
        let mut arena: Vec<Option<HierarchyNode>> = vec![None; n];
        for &idx in preorder.iter().rev() {
            let mut node = to_hierarchy_node(self.folders[idx]);
            node.children = Some(
                claimed[idx]
                    .iter()
                    .filter_map(|&child| arena[child].take())
                    .collect(),
            );
            arena[idx] = Some(node);
        }

        Assembled {
            nodes: top.iter().filter_map(|&idx| arena[idx].take()).collect(),
            placed: preorder.len(),
        }
    }
}
