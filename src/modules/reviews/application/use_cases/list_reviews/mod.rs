mod handler;
mod query;
mod result;

pub use handler::ListReviewsHandler;
pub use query::ListReviewsQuery;
pub use result::ReviewPage;
