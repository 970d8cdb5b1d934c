use std::sync::Arc;

use crate::modules::catalog::domain::{Manga, MangaRepository};
use crate::modules::library::domain::{
    LibraryEntry, ReadingEntry, ReadingStatus, ReadingStatusRepository, StatusFilter,
};
use crate::shared::domain::value_objects::{require_authenticated, UserId};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct LibraryService {
    status_repo: Arc<dyn ReadingStatusRepository>,
    manga_repo: Arc<dyn MangaRepository>,
}

impl LibraryService {
    pub fn new(
        status_repo: Arc<dyn ReadingStatusRepository>,
        manga_repo: Arc<dyn MangaRepository>,
    ) -> Self {
        Self {
            status_repo,
            manga_repo,
        }
    }

    pub async fn set_status(
        &self,
        actor: Option<UserId>,
        mal_id: i32,
        status: ReadingStatus,
    ) -> AppResult<ReadingEntry> {
        let user_id = require_authenticated(actor)?;
        let manga = self.require_title(mal_id).await?;

        let entry = ReadingEntry::new(user_id, manga.id, status);
        let saved = self.status_repo.upsert(&entry).await?;

        log_info!("User {} marked title {} as {}", user_id, mal_id, saved.status);
        Ok(saved)
    }

    pub async fn get_status(
        &self,
        actor: Option<UserId>,
        mal_id: i32,
    ) -> AppResult<Option<ReadingStatus>> {
        let user_id = require_authenticated(actor)?;
        let manga = self.require_title(mal_id).await?;

        let entry = self.status_repo.find(user_id, manga.id).await?;
        Ok(entry.map(|e| e.status))
    }

    /// Clear the status; returns whether one was set.
    pub async fn remove_status(&self, actor: Option<UserId>, mal_id: i32) -> AppResult<bool> {
        let user_id = require_authenticated(actor)?;
        let manga = self.require_title(mal_id).await?;

        let removed = self.status_repo.delete(user_id, manga.id).await?;
        log_debug!("Reading status of {} for title {} removed: {}", user_id, mal_id, removed);
        Ok(removed)
    }

    /// List a user's library; `filter` is a status label or `all`.
    pub async fn list_by_status(
        &self,
        user_id: UserId,
        filter: &str,
    ) -> AppResult<Vec<LibraryEntry>> {
        let filter: StatusFilter = filter.parse()?;
        self.status_repo
            .list_for_user(user_id, filter.status())
            .await
    }

    async fn require_title(&self, mal_id: i32) -> AppResult<Manga> {
        Validator::validate_mal_id(mal_id)?;
        self.manga_repo
            .find_by_mal_id(mal_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Manga {} not found", mal_id)))
    }
}
