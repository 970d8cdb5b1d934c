pub mod reading_status_repository_impl;

pub use reading_status_repository_impl::ReadingStatusRepositoryImpl;
