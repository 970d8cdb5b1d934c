use uuid::Uuid;

use crate::modules::reviews::domain::ReviewCommit;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_warn};

pub(super) fn title_not_found(mal_id: i32) -> AppError {
    AppError::NotFound(format!("Manga {} not found", mal_id))
}

pub(super) fn review_not_found(review_id: Uuid) -> AppError {
    AppError::NotFound(format!("Review {} not found", review_id))
}

/// Log the outcome of a review transaction and pass it through.
pub(super) fn log_outcome(
    operation: &str,
    mal_id: i32,
    result: AppResult<ReviewCommit>,
) -> AppResult<ReviewCommit> {
    match &result {
        Ok(commit) => {
            log_debug!("Review {} {} on title {}", commit.review.id, operation, mal_id);
            LogContext::aggregate_change(
                mal_id,
                operation,
                commit.manga.score,
                commit.manga.review_count,
            );
        }
        Err(e) => log_warn!("Review {} on title {} aborted: {}", operation, mal_id, e),
    }
    result
}
