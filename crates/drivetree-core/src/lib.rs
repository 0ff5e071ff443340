//! # drivetree-core
//!
//! Core crate for DriveTree. Contains the configuration schema, the
//! remote file store trait with its wire-level item record, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other DriveTree crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
