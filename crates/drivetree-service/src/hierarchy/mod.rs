//! Flat-listing to tree reconstruction.

mod arena;
pub mod classify;
pub mod forest;

pub use classify::{
    classify_content, classify_each, collect_content, collect_content_each, resolve_folder,
};
pub use forest::build_folder_forest;

#[cfg(test)]
pub(crate) mod test_support {
    use drivetree_core::traits::{FOLDER_MIME_TYPE, RemoteItem};

    pub const ROOT: &str = "root";

    pub fn folder(id: &str, name: &str, parents: &[&str]) -> RemoteItem {
        RemoteItem {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            description: None,
            web_link: None,
        }
    }

    pub fn file(id: &str, name: &str, mime: &str, parents: &[&str]) -> RemoteItem {
        RemoteItem {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: mime.to_string(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            description: None,
            web_link: None,
        }
    }
}
