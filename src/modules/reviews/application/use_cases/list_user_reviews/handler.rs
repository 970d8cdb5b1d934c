use async_trait::async_trait;
use std::sync::Arc;

use super::query::ListUserReviewsQuery;
use crate::modules::reviews::domain::{ReviewStore, UserReview};
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;

/// Lists a user's reviews, newest first, with the reviewed titles
pub struct ListUserReviewsHandler {
    store: Arc<dyn ReviewStore>,
}

impl ListUserReviewsHandler {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Query<ListUserReviewsQuery, Vec<UserReview>> for ListUserReviewsHandler {
    async fn execute(&self, query: ListUserReviewsQuery) -> AppResult<Vec<UserReview>> {
        self.store.list_for_user(query.user_id).await
    }
}
