mod common;
pub mod create_review;
pub mod delete_review;
pub mod list_reviews;
pub mod list_user_reviews;
pub mod update_review;

pub use create_review::{CreateReviewCommand, CreateReviewHandler};
pub use delete_review::{DeleteReviewCommand, DeleteReviewHandler};
pub use list_reviews::{ListReviewsHandler, ListReviewsQuery, ReviewPage};
pub use list_user_reviews::{ListUserReviewsHandler, ListUserReviewsQuery};
pub use update_review::{UpdateReviewCommand, UpdateReviewHandler};
