use crate::modules::reviews::domain::Rating;
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Command for posting a review on a title
#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    pub mal_id: i32,
    pub actor: Option<UserId>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub spoiler_tagged: Option<bool>,
}

/// Field values that passed validation.
#[derive(Debug, Clone)]
pub(super) struct ValidatedReview {
    pub rating: Rating,
    pub comment: String,
    pub spoiler_tagged: bool,
}

impl CreateReviewCommand {
    pub fn new(mal_id: i32, actor: Option<UserId>, rating: i32, comment: impl Into<String>) -> Self {
        Self {
            mal_id,
            actor,
            rating: Some(rating),
            comment: Some(comment.into()),
            spoiler_tagged: None,
        }
    }

    pub fn with_spoiler(mut self, spoiler_tagged: bool) -> Self {
        self.spoiler_tagged = Some(spoiler_tagged);
        self
    }

    pub(super) fn validate(&self) -> AppResult<ValidatedReview> {
        let rating = self
            .rating
            .ok_or_else(|| AppError::ValidationError("Rating is required".to_string()))
            .and_then(Rating::new)?;
        let comment = self
            .comment
            .as_deref()
            .ok_or_else(|| AppError::ValidationError("Comment is required".to_string()))
            .and_then(Validator::validate_comment)?;
        Validator::validate_mal_id(self.mal_id)?;

        Ok(ValidatedReview {
            rating,
            comment,
            spoiler_tagged: self.spoiler_tagged.unwrap_or(false),
        })
    }
}
