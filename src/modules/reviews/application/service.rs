use std::sync::Arc;

use crate::modules::catalog::domain::MangaRepository;
use crate::modules::reviews::application::use_cases::{
    CreateReviewCommand, CreateReviewHandler, DeleteReviewCommand, DeleteReviewHandler,
    ListReviewsHandler, ListReviewsQuery, ListUserReviewsHandler, ListUserReviewsQuery,
    ReviewPage, UpdateReviewCommand, UpdateReviewHandler,
};
use crate::modules::reviews::domain::{ReviewCommit, ReviewStore, UserReview};
use crate::shared::application::use_case::{Query, UseCase};
use crate::shared::config::ReviewsConfig;
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::AppResult;

/// Entry points the request layer calls for review operations.
pub struct ReviewService {
    create: CreateReviewHandler,
    update: UpdateReviewHandler,
    delete: DeleteReviewHandler,
    list: ListReviewsHandler,
    list_by_user: ListUserReviewsHandler,
}

impl ReviewService {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        manga_repo: Arc<dyn MangaRepository>,
        config: ReviewsConfig,
    ) -> Self {
        Self {
            create: CreateReviewHandler::new(Arc::clone(&store)),
            update: UpdateReviewHandler::new(Arc::clone(&store)),
            delete: DeleteReviewHandler::new(Arc::clone(&store)),
            list: ListReviewsHandler::new(manga_repo, Arc::clone(&store), config),
            list_by_user: ListUserReviewsHandler::new(store),
        }
    }

    pub async fn create_review(&self, command: CreateReviewCommand) -> AppResult<ReviewCommit> {
        self.create.execute(command).await
    }

    pub async fn update_review(&self, command: UpdateReviewCommand) -> AppResult<ReviewCommit> {
        self.update.execute(command).await
    }

    pub async fn delete_review(&self, command: DeleteReviewCommand) -> AppResult<ReviewCommit> {
        self.delete.execute(command).await
    }

    pub async fn list_reviews(&self, query: ListReviewsQuery) -> AppResult<ReviewPage> {
        self.list.execute(query).await
    }

    pub async fn list_user_reviews(&self, user_id: UserId) -> AppResult<Vec<UserReview>> {
        self.list_by_user
            .execute(ListUserReviewsQuery::new(user_id))
            .await
    }
}
