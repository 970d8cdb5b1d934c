pub mod reading_status;
