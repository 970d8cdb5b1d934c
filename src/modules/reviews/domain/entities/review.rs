use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::MangaSummary;
use crate::modules::reviews::domain::value_objects::Rating;
use crate::shared::domain::value_objects::UserId;

/// One user's rating and comment for one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub manga_id: Uuid,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: String,
    pub spoiler_tagged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field changes for an existing review. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewChanges {
    pub rating: Option<Rating>,
    pub comment: Option<String>,
    pub spoiler_tagged: Option<bool>,
}

impl ReviewChanges {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.comment.is_none() && self.spoiler_tagged.is_none()
    }
}

/// A review together with the title it belongs to, for per-user listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReview {
    pub review: Review,
    pub manga: MangaSummary,
}

impl Review {
    pub fn new(
        manga_id: Uuid,
        user_id: UserId,
        rating: Rating,
        comment: String,
        spoiler_tagged: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            manga_id,
            user_id,
            rating,
            comment,
            spoiler_tagged,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Apply `changes` and return the previous rating.
    ///
    /// `updated_at` only moves when some field actually changes.
    pub fn apply_changes(&mut self, changes: ReviewChanges) -> Rating {
        let previous = self.rating;
        let mut touched = false;

        if let Some(rating) = changes.rating {
            touched |= rating != self.rating;
            self.rating = rating;
        }
        if let Some(comment) = changes.comment {
            touched |= comment != self.comment;
            self.comment = comment;
        }
        if let Some(spoiler) = changes.spoiler_tagged {
            touched |= spoiler != self.spoiler_tagged;
            self.spoiler_tagged = spoiler;
        }
        if touched {
            self.updated_at = Utc::now();
        }
        previous
    }
}
