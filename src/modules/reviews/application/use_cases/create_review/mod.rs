mod command;
mod handler;

pub use command::CreateReviewCommand;
pub use handler::CreateReviewHandler;
