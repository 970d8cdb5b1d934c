use std::sync::Arc;

use crate::modules::catalog::application::ports::{CatalogClient, CatalogManga};
use crate::modules::catalog::domain::{Manga, MangaRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

const SEARCH_LIMIT: usize = 5;

pub struct CatalogService {
    manga_repo: Arc<dyn MangaRepository>,
    client: Arc<dyn CatalogClient>,
}

impl CatalogService {
    pub fn new(manga_repo: Arc<dyn MangaRepository>, client: Arc<dyn CatalogClient>) -> Self {
        Self { manga_repo, client }
    }

    /// Return the stored title, fetching and storing it on first view.
    ///
    /// Concurrent first views of the same id converge on one row: the insert
    /// is conflict-tolerant and returns whichever row won.
    pub async fn ensure_title(&self, mal_id: i32) -> AppResult<Manga> {
        Validator::validate_mal_id(mal_id)?;

        if let Some(manga) = self.manga_repo.find_by_mal_id(mal_id).await? {
            return Ok(manga);
        }

        log_debug!("Title {} not cached, fetching from catalog", mal_id);
        let Some(remote) = self.client.fetch_manga(mal_id).await? else {
            return Err(AppError::NotFound(format!("Manga {} not found", mal_id)));
        };

        let manga = Manga::new(remote.mal_id, remote.title, remote.cover_image)
            .with_synopsis(remote.synopsis)
            .with_author(remote.author)
            .with_published_from(remote.published_from);

        let stored = self.manga_repo.insert_or_get(&manga).await?;
        log_info!("Catalogued title {} ({})", stored.mal_id, stored.title);
        Ok(stored)
    }

    /// Read a stored title without contacting the catalog.
    pub async fn get_title(&self, mal_id: i32) -> AppResult<Manga> {
        Validator::validate_mal_id(mal_id)?;
        self.manga_repo
            .find_by_mal_id(mal_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Manga {} not found", mal_id)))
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<CatalogManga>> {
        let query = Validator::validate_search_query(query)?;
        self.client.search(&query, SEARCH_LIMIT).await
    }
}
