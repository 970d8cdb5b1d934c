pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::review::{Review, ReviewChanges, UserReview};
pub use repositories::review_store::{
    ReviewCommit, ReviewStore, ReviewTransaction, TransactionWork,
};
pub use services::aggregate_updater::apply_rating_change;
pub use value_objects::{Rating, RatingChange, ReviewSort, ScoreAggregate};
