use async_trait::async_trait;
use std::sync::Arc;

use super::{query::ListReviewsQuery, result::ReviewPage};
use crate::log_debug;
use crate::modules::catalog::domain::MangaRepository;
use crate::modules::reviews::application::use_cases::common::title_not_found;
use crate::modules::reviews::domain::ReviewStore;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::application::use_case::Query;
use crate::shared::config::ReviewsConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Lists a title's reviews page by page
pub struct ListReviewsHandler {
    manga_repo: Arc<dyn MangaRepository>,
    store: Arc<dyn ReviewStore>,
    config: ReviewsConfig,
}

impl ListReviewsHandler {
    pub fn new(
        manga_repo: Arc<dyn MangaRepository>,
        store: Arc<dyn ReviewStore>,
        config: ReviewsConfig,
    ) -> Self {
        Self {
            manga_repo,
            store,
            config,
        }
    }
}

#[async_trait]
impl Query<ListReviewsQuery, ReviewPage> for ListReviewsHandler {
    async fn execute(&self, query: ListReviewsQuery) -> AppResult<ReviewPage> {
        Validator::validate_mal_id(query.mal_id)?;
        let pagination = PaginationParams::resolve(
            query.page,
            query.page_size,
            self.config.default_page_size,
            self.config.max_page_size,
        )?;

        let manga = self
            .manga_repo
            .find_by_mal_id(query.mal_id)
            .await?
            .ok_or_else(|| title_not_found(query.mal_id))?;

        let total = self.store.count_for_manga(manga.id).await?;
        let reviews = if pagination.offset() as u64 >= total {
            Vec::new()
        } else {
            self.store
                .list_for_manga(manga.id, query.sort, pagination)
                .await?
        };

        log_debug!(
            "Listed {} of {} reviews for title {} (page {}, sort {})",
            reviews.len(),
            total,
            manga.mal_id,
            pagination.page,
            query.sort
        );

        Ok(ReviewPage::new(
            PaginatedResult::new(reviews, total, &pagination),
            manga.score,
        ))
    }
}
