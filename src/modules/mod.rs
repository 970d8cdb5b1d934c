pub mod catalog;
pub mod library;
pub mod reviews;
