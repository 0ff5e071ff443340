//! Hierarchy node entities.

pub mod metadata;
pub mod node;

pub use metadata::ItemMetadata;
pub use node::{ContentKind, HierarchyNode, to_hierarchy_node};
