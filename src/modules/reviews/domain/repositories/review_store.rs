use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::catalog::domain::Manga;
use crate::modules::reviews::domain::entities::review::{Review, UserReview};
use crate::modules::reviews::domain::value_objects::{ReviewSort, ScoreAggregate};
use crate::shared::application::pagination::PaginationParams;
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::AppResult;

/// Outcome of a committed review transaction: the affected review (as
/// written, or as it was before deletion) and the title with its new aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCommit {
    pub review: Review,
    pub manga: Manga,
}

/// Unit of work executed inside one store transaction.
pub type TransactionWork =
    Box<dyn FnOnce(&mut dyn ReviewTransaction) -> AppResult<ReviewCommit> + Send>;

/// Durable review storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Run `work` in a single transaction.
    ///
    /// Writes made through the handle are committed only if `work` returns
    /// `Ok`; an `Err` or a panic discards all of them.
    async fn transaction(&self, work: TransactionWork) -> AppResult<ReviewCommit>;

    /// One page of a title's reviews in `sort` order.
    async fn list_for_manga(
        &self,
        manga_id: Uuid,
        sort: ReviewSort,
        pagination: PaginationParams,
    ) -> AppResult<Vec<Review>>;

    async fn count_for_manga(&self, manga_id: Uuid) -> AppResult<u64>;

    /// Every review written by `user_id`, newest first.
    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<UserReview>>;
}

/// Store handle valid for the lifetime of one transaction.
pub trait ReviewTransaction {
    /// Load a title and hold its row lock until the transaction ends.
    ///
    /// Concurrent transactions on the same title queue here, which
    /// serializes their aggregate read-modify-write.
    fn lock_manga(&mut self, mal_id: i32) -> AppResult<Option<Manga>>;

    fn find_review(&mut self, manga_id: Uuid, review_id: Uuid) -> AppResult<Option<Review>>;

    /// Fails with `DuplicateReview` if the user already reviewed the title.
    fn insert_review(&mut self, review: &Review) -> AppResult<()>;

    fn update_review(&mut self, review: &Review) -> AppResult<()>;

    fn delete_review(&mut self, review_id: Uuid) -> AppResult<()>;

    fn write_aggregate(&mut self, manga_id: Uuid, aggregate: &ScoreAggregate) -> AppResult<()>;
}
