use uuid::Uuid;

use crate::modules::reviews::domain::{Rating, ReviewChanges};
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Command for editing any subset of a review's fields
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewCommand {
    pub mal_id: i32,
    pub review_id: Uuid,
    pub actor: Option<UserId>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub spoiler_tagged: Option<bool>,
}

impl UpdateReviewCommand {
    pub fn new(mal_id: i32, review_id: Uuid, actor: Option<UserId>) -> Self {
        Self {
            mal_id,
            review_id,
            actor,
            ..Default::default()
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn spoiler_tagged(mut self, spoiler_tagged: bool) -> Self {
        self.spoiler_tagged = Some(spoiler_tagged);
        self
    }

    /// Validate the supplied fields only.
    pub(super) fn changes(&self) -> AppResult<ReviewChanges> {
        Validator::validate_mal_id(self.mal_id)?;
        Ok(ReviewChanges {
            rating: self.rating.map(Rating::new).transpose()?,
            comment: self
                .comment
                .as_deref()
                .map(Validator::validate_comment)
                .transpose()?,
            spoiler_tagged: self.spoiler_tagged,
        })
    }
}
