/// Reviews bounded context
///
/// Users rate titles 1 to 10 with a comment. Every create, update and delete
/// changes the review row and the title's aggregate score in one store
/// transaction, so readers never observe one without the other.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ReviewService;
pub use domain::{
    Rating, RatingChange, Review, ReviewCommit, ReviewSort, ReviewStore, ReviewTransaction,
    ScoreAggregate, UserReview,
};
pub use infrastructure::PgReviewStore;
