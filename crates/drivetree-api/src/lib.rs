//! # drivetree-api
//!
//! HTTP API layer for DriveTree built on Axum.
//!
//! Provides the hierarchy, content, catalog and health endpoints,
//! middleware (CORS, compression, request logging, timeouts), DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
