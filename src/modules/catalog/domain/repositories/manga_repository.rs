use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::manga::Manga;
use crate::shared::errors::AppResult;

/// Port for title persistence.
///
/// Has no way to change aggregate fields; those are only written inside
/// review transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MangaRepository: Send + Sync {
    async fn find_by_mal_id(&self, mal_id: i32) -> AppResult<Option<Manga>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manga>>;

    /// Insert a new title unless one with the same `mal_id` already exists.
    /// Returns whichever row is stored afterwards.
    async fn insert_or_get(&self, manga: &Manga) -> AppResult<Manga>;
}
