//! Standalone HTTP server for the magazine scan archive.
//!
//! Thin adapter over the `shared` listing crate: three JSON endpoints, a
//! referer gate on `/api/*`, and unconditional CORS.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use app::{create_router, AppState};
