//! Abstract repository interface and its error types.
//!
//! Storage backends implement [`PostRepository`]; everything above the
//! persistence layer depends only on this module.

pub mod error;
pub mod posts;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use posts::PostRepository;
