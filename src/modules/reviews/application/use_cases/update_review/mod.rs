mod command;
mod handler;

pub use command::UpdateReviewCommand;
pub use handler::UpdateReviewHandler;
