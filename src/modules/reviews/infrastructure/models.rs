use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::reviews::domain::{Rating, Review};
use crate::schema::reviews;
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::AppError;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewModel {
    pub id: Uuid,
    pub manga_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub spoiler_tagged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct NewReview {
    pub id: Uuid,
    pub manga_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub spoiler_tagged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Editable columns only; ownership and parent never change.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewChangeset {
    pub rating: i32,
    pub comment: String,
    pub spoiler_tagged: bool,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ReviewModel> for Review {
    type Error = AppError;

    fn try_from(model: ReviewModel) -> Result<Self, Self::Error> {
        Ok(Review {
            id: model.id,
            manga_id: model.manga_id,
            user_id: UserId::new(model.user_id),
            rating: Rating::new(model.rating)?,
            comment: model.comment,
            spoiler_tagged: model.spoiler_tagged,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<&Review> for NewReview {
    fn from(review: &Review) -> Self {
        NewReview {
            id: review.id,
            manga_id: review.manga_id,
            user_id: review.user_id.as_uuid(),
            rating: review.rating.into(),
            comment: review.comment.clone(),
            spoiler_tagged: review.spoiler_tagged,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<&Review> for ReviewChangeset {
    fn from(review: &Review) -> Self {
        ReviewChangeset {
            rating: review.rating.into(),
            comment: review.comment.clone(),
            spoiler_tagged: review.spoiler_tagged,
            updated_at: review.updated_at,
        }
    }
}
