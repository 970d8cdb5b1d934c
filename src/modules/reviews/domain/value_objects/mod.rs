mod rating;
mod review_sort;
mod score_aggregate;

pub use rating::Rating;
pub use review_sort::ReviewSort;
pub use score_aggregate::{RatingChange, ScoreAggregate};
