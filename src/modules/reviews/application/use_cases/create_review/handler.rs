use async_trait::async_trait;
use std::sync::Arc;

use super::command::CreateReviewCommand;
use crate::log_debug;
use crate::modules::reviews::application::use_cases::common::{log_outcome, title_not_found};
use crate::modules::reviews::domain::{
    apply_rating_change, RatingChange, Review, ReviewCommit, ReviewStore, ReviewTransaction,
    TransactionWork,
};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::value_objects::require_authenticated;
use crate::shared::errors::AppResult;

/// Posts a review and folds its rating into the title's aggregate
pub struct CreateReviewHandler {
    store: Arc<dyn ReviewStore>,
}

impl CreateReviewHandler {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase<CreateReviewCommand, ReviewCommit> for CreateReviewHandler {
    async fn execute(&self, command: CreateReviewCommand) -> AppResult<ReviewCommit> {
        let user_id = require_authenticated(command.actor)?;
        let input = command.validate()?;
        let mal_id = command.mal_id;

        log_debug!("Creating review by {} on title {}", user_id, mal_id);

        let work: TransactionWork = Box::new(move |tx: &mut dyn ReviewTransaction| {
            let mut manga = tx
                .lock_manga(mal_id)?
                .ok_or_else(|| title_not_found(mal_id))?;

            let review = Review::new(
                manga.id,
                user_id,
                input.rating,
                input.comment,
                input.spoiler_tagged,
            );
            tx.insert_review(&review)?;
            apply_rating_change(tx, &mut manga, RatingChange::Add(review.rating))?;

            Ok(ReviewCommit { review, manga })
        });

        log_outcome("create", mal_id, self.store.transaction(work).await)
    }
}
