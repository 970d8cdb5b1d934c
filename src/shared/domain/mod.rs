pub mod value_objects;

pub use value_objects::{require_authenticated, UserId};
