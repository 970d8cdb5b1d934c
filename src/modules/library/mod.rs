/// Library bounded context
///
/// Per-user reading status for catalogued titles. One status per
/// (user, title); setting it again replaces the previous value.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::LibraryService;
pub use domain::{LibraryEntry, ReadingEntry, ReadingStatus, ReadingStatusRepository, StatusFilter};
pub use infrastructure::ReadingStatusRepositoryImpl;
