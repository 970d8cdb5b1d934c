use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::library::domain::entities::reading_entry::{LibraryEntry, ReadingEntry};
use crate::modules::library::domain::value_objects::reading_status::ReadingStatus;
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadingStatusRepository: Send + Sync {
    /// Insert or replace the status for (user, title).
    async fn upsert(&self, entry: &ReadingEntry) -> AppResult<ReadingEntry>;

    async fn find(&self, user_id: UserId, manga_id: Uuid) -> AppResult<Option<ReadingEntry>>;

    /// Returns whether a row was removed.
    async fn delete(&self, user_id: UserId, manga_id: Uuid) -> AppResult<bool>;

    /// Entries for `user_id`, most recently updated first.
    async fn list_for_user(
        &self,
        user_id: UserId,
        status: Option<ReadingStatus>,
    ) -> AppResult<Vec<LibraryEntry>>;
}
