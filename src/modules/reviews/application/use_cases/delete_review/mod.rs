mod command;
mod handler;

pub use command::DeleteReviewCommand;
pub use handler::DeleteReviewHandler;
