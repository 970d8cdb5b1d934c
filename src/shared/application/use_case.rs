use crate::shared::errors::AppResult;
/// Base traits for use cases following a CQRS split
///
/// Command handlers mutate state, query handlers only read. Both are
/// async because every handler suspends on store round-trips.
///
/// # Example
///
/// ```ignore
/// #[async_trait]
/// impl UseCase<CreateReviewCommand, Review> for CreateReviewHandler {
///     async fn execute(&self, command: CreateReviewCommand) -> AppResult<Review> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
