/// Shared application layer patterns
///
/// Application-level abstractions used across multiple bounded contexts.
pub mod pagination;
pub mod use_case;

pub use pagination::*;
pub use use_case::{Query, UseCase};
