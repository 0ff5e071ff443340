//! Route handlers organized by domain.

pub mod catalog;
pub mod content;
pub mod folder;
pub mod health;
pub mod hierarchy;
