//! Repository implementations for database access
//!
//! Single-statement operations only: every call borrows one pooled
//! connection, issues one query, and releases it on all exit paths.

pub mod drawings;

pub use drawings::{DbError, Drawing, DrawingRepo, DrawingSummary};
