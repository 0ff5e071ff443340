//! Hierarchy node shape consumed by the tree widget and content lists.

use serde::{Deserialize, Serialize};

use drivetree_core::traits::RemoteItem;

use super::metadata::ItemMetadata;

/// Substring of a MIME type that marks an item as a video.
const VIDEO_MIME_MARKER: &str = "video";

/// A node in the folder forest, or an entry in a flat content list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    /// Remote item id.
    pub id: String,
    /// Remote item name.
    pub name: String,
    /// Display title (defaults to `name`).
    pub title: String,
    /// Display description (defaults to the raw description field).
    pub description: Option<String>,
    /// Tags parsed from the description field.
    pub tags: Vec<String>,
    /// External link.
    pub url: Option<String>,
    /// Remote MIME type.
    pub mime_type: String,
    /// Whether the item is a folder.
    pub is_folder: bool,
    /// Whether the item is a video.
    pub is_video: bool,
    /// Parent ids as listed by the remote store.
    pub parent_ids: Vec<String>,
    /// Child folders. Present for folders, absent for everything else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<HierarchyNode>>,
    /// Checkbox state, owned by the UI.
    #[serde(default)]
    pub checked: bool,
    /// Expansion state, owned by the UI.
    #[serde(default)]
    pub expanded: bool,
}

/// Content classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A folder.
    Folder,
    /// A video file.
    Video,
    /// Any other file.
    Article,
}

impl HierarchyNode {
    /// Child folders, empty for non-folders.
    pub fn children(&self) -> &[HierarchyNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The head of the parent list, if any.
    pub fn first_parent(&self) -> Option<&str> {
        self.parent_ids.first().map(String::as_str)
    }

    /// Content classification.
    pub fn kind(&self) -> ContentKind {
        if self.is_folder {
            ContentKind::Folder
        } else if self.is_video {
            ContentKind::Video
        } else {
            ContentKind::Article
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Depth of this subtree; a node without children has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

/// Map a remote item to a childless hierarchy node.
///
/// Folders get an empty `children` list for the builder to fill; every
/// other item gets none.
pub fn to_hierarchy_node(item: &RemoteItem) -> HierarchyNode {
    let metadata = ItemMetadata::parse(item.description.as_deref());
    let is_folder = item.is_folder();

    HierarchyNode {
        id: item.id.clone(),
        name: item.name.clone(),
        title: metadata.title.unwrap_or_else(|| item.name.clone()),
        description: metadata.description.or_else(|| item.description.clone()),
        tags: metadata.tags,
        url: item.web_link.clone(),
        mime_type: item.mime_type.clone(),
        is_folder,
        is_video: item.mime_type.contains(VIDEO_MIME_MARKER),
        parent_ids: item.parents.clone(),
        children: is_folder.then(Vec::new),
        checked: false,
        expanded: false,
    }
}
