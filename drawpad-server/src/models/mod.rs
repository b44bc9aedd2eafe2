//! Domain models with validation at construction
//!
//! User input is validated when creating these types. Invalid input
//! returns ValidationError, not panic.

pub mod drawing;
pub mod validation;

pub use drawing::DrawingTitle;
pub use validation::ValidationError;
