pub mod reading_entry;
