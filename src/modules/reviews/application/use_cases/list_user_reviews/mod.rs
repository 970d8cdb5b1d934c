mod handler;
mod query;

pub use handler::ListUserReviewsHandler;
pub use query::ListUserReviewsQuery;
