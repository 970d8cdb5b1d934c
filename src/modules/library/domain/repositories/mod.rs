pub mod reading_status_repository;
