mod user_id;

pub use user_id::{require_authenticated, UserId};
