pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::reading_entry::{LibraryEntry, ReadingEntry};
pub use repositories::reading_status_repository::ReadingStatusRepository;
pub use value_objects::reading_status::{ReadingStatus, StatusFilter};
