//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod comment;
pub mod query;
pub mod validation;

pub use comment::NewComment;
pub use query::{Order, SortBy};
pub use validation::ValidationError;
