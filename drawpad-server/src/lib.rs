//! drawpad-server: HTTP persistence service for freehand drawings
//!
//! Stores opaque stroke documents in PostgreSQL and exposes them
//! through a small JSON API: create, list, fetch, delete.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{run_server, AppState, ServerConfig};
