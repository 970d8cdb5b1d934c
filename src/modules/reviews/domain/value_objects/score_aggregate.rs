use serde::Serialize;

use super::Rating;
use crate::modules::catalog::domain::Manga;
use crate::shared::errors::{AppError, AppResult};

/// One rating event against a title's aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
    Add(Rating),
    Remove(Rating),
    Replace { old: Rating, new: Rating },
}

impl RatingChange {
    pub fn label(&self) -> &'static str {
        match self {
            RatingChange::Add(_) => "add",
            RatingChange::Remove(_) => "remove",
            RatingChange::Replace { .. } => "replace",
        }
    }
}

/// Running mean of a title's ratings, kept as an integer sum and a count.
///
/// `score()` is always `rating_total / review_count`, or 0 with no reviews,
/// so repeated edits never accumulate rounding error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAggregate {
    rating_total: i64,
    review_count: i32,
}

impl ScoreAggregate {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild from persisted columns.
    pub fn from_parts(rating_total: i64, review_count: i32) -> Self {
        Self {
            rating_total,
            review_count,
        }
    }

    pub fn rating_total(&self) -> i64 {
        self.rating_total
    }

    pub fn review_count(&self) -> i32 {
        self.review_count
    }

    pub fn score(&self) -> f64 {
        if self.review_count <= 0 {
            0.0
        } else {
            self.rating_total as f64 / self.review_count as f64
        }
    }

    /// Whether the pair could have been produced by ratings in 1..=10.
    pub fn is_consistent(&self) -> bool {
        let count = self.review_count as i64;
        self.review_count >= 0
            && self.rating_total >= count * Rating::MIN as i64
            && self.rating_total <= count * Rating::MAX as i64
    }

    /// Compute the aggregate after `change`.
    ///
    /// Returns `Ok(None)` when the change leaves the aggregate untouched
    /// (replacing a rating with the same value), so callers can skip the write.
    pub fn apply(&self, change: RatingChange) -> AppResult<Option<Self>> {
        match change {
            RatingChange::Add(rating) => Ok(Some(Self {
                rating_total: self.rating_total + rating.value() as i64,
                review_count: self.review_count + 1,
            })),
            RatingChange::Remove(rating) => {
                let review_count = (self.review_count - 1).max(0);
                if review_count == 0 {
                    return Ok(Some(Self::empty()));
                }
                Ok(Some(Self {
                    rating_total: self.rating_total - rating.value() as i64,
                    review_count,
                }))
            }
            RatingChange::Replace { old, new } => {
                if old == new {
                    return Ok(None);
                }
                if self.review_count <= 0 {
                    return Err(AppError::InternalError(
                        "Cannot replace a rating on a title with no reviews".to_string(),
                    ));
                }
                Ok(Some(Self {
                    rating_total: self.rating_total - old.value() as i64 + new.value() as i64,
                    review_count: self.review_count,
                }))
            }
        }
    }

    /// Copy the aggregate onto a title record.
    pub fn write_to(&self, manga: &mut Manga) {
        manga.rating_total = self.rating_total;
        manga.review_count = self.review_count;
        manga.score = self.score();
    }
}

impl From<&Manga> for ScoreAggregate {
    fn from(manga: &Manga) -> Self {
        Self::from_parts(manga.rating_total, manga.review_count)
    }
}
