//! Route handlers organized by resource

pub mod drawings;
pub mod health;
