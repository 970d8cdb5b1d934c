use crate::shared::domain::value_objects::UserId;

/// Query for every review a user has written
#[derive(Debug, Clone, Copy)]
pub struct ListUserReviewsQuery {
    pub user_id: UserId,
}

impl ListUserReviewsQuery {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
