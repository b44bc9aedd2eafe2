//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on RETURNING for inserted rows - no insert-then-reselect
//! - Single-statement operations - no explicit transactions needed

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
