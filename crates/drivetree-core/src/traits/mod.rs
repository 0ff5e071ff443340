//! Core traits defined in `drivetree-core` and implemented by other crates.

pub mod remote_store;

pub use remote_store::{FOLDER_MIME_TYPE, ItemPage, RemoteFileStore, RemoteItem};
