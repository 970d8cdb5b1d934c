use uuid::Uuid;

use crate::shared::domain::value_objects::UserId;

/// Command for removing a review
#[derive(Debug, Clone)]
pub struct DeleteReviewCommand {
    pub mal_id: i32,
    pub review_id: Uuid,
    pub actor: Option<UserId>,
}

impl DeleteReviewCommand {
    pub fn new(mal_id: i32, review_id: Uuid, actor: Option<UserId>) -> Self {
        Self {
            mal_id,
            review_id,
            actor,
        }
    }
}
