use async_trait::async_trait;
use std::sync::Arc;

use super::command::DeleteReviewCommand;
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
use crate::shared::utils::Validator;

/// Deletes a review and removes its rating from the aggregate
///
/// The returned commit carries the review as it was before deletion.
pub struct DeleteReviewHandler {
    store: Arc<dyn ReviewStore>,
}

impl DeleteReviewHandler {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase<DeleteReviewCommand, ReviewCommit> for DeleteReviewHandler {
    async fn execute(&self, command: DeleteReviewCommand) -> AppResult<ReviewCommit> {
        let user_id = require_authenticated(command.actor)?;
        Validator::validate_mal_id(command.mal_id)?;
        let (mal_id, review_id) = (command.mal_id, command.review_id);

        log_debug!("Deleting review {} on title {}", review_id, mal_id);

        let work: TransactionWork = Box::new(move |tx: &mut dyn ReviewTransaction| {
            let mut manga = tx
                .lock_manga(mal_id)?
                .ok_or_else(|| title_not_found(mal_id))?;
            let review = tx
                .find_review(manga.id, review_id)?
                .ok_or_else(|| review_not_found(review_id))?;

            if !review.is_owned_by(user_id) {
                return Err(AppError::Forbidden(
                    "You can only delete your own reviews".to_string(),
                ));
            }

            tx.delete_review(review.id)?;
            apply_rating_change(tx, &mut manga, RatingChange::Remove(review.rating))?;

            Ok(ReviewCommit { review, manga })
        });

        log_outcome("delete", mal_id, self.store.transaction(work).await)
    }
}
