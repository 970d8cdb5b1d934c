use async_trait::async_trait;
use std::sync::Arc;

use super::command::UpdateReviewCommand;
use crate::log_debug;
use crate::modules::reviews::application::use_cases::common::{
    log_outcome, review_not_found, title_not_found,
};
use crate::modules::reviews::domain::{
    apply_rating_change, RatingChange, ReviewCommit, ReviewStore, ReviewTransaction,
    TransactionWork,
};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::value_objects::require_authenticated;
use crate::shared::errors::{AppError, AppResult};

/// Edits a review; a rating change replaces the old rating in the aggregate
pub struct UpdateReviewHandler {
    store: Arc<dyn ReviewStore>,
}

impl UpdateReviewHandler {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase<UpdateReviewCommand, ReviewCommit> for UpdateReviewHandler {
    async fn execute(&self, command: UpdateReviewCommand) -> AppResult<ReviewCommit> {
        let user_id = require_authenticated(command.actor)?;
        let changes = command.changes()?;
        let (mal_id, review_id) = (command.mal_id, command.review_id);

        log_debug!("Updating review {} on title {}", review_id, mal_id);

        let work: TransactionWork = Box::new(move |tx: &mut dyn ReviewTransaction| {
            let mut manga = tx
                .lock_manga(mal_id)?
                .ok_or_else(|| title_not_found(mal_id))?;
            let mut review = tx
                .find_review(manga.id, review_id)?
                .ok_or_else(|| review_not_found(review_id))?;

            if !review.is_owned_by(user_id) {
                return Err(AppError::Forbidden(
                    "You can only update your own reviews".to_string(),
                ));
            }
            if changes.is_empty() {
                return Ok(ReviewCommit { review, manga });
            }

            let previous = review.apply_changes(changes);
            tx.update_review(&review)?;
            apply_rating_change(
                tx,
                &mut manga,
                RatingChange::Replace {
                    old: previous,
                    new: review.rating,
                },
            )?;

            Ok(ReviewCommit { review, manga })
        });

        log_outcome("update", mal_id, self.store.transaction(work).await)
    }
}
