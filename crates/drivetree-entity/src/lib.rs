//! # drivetree-entity
//!
//! Domain value objects for DriveTree. A [`HierarchyNode`] is the shape the
//! tree widget and content lists consume; it is derived from a remote
//! item by [`to_hierarchy_node`].

pub mod hierarchy;

pub use hierarchy::{ContentKind, HierarchyNode, ItemMetadata, to_hierarchy_node};
