#![allow(dead_code)]

pub mod factories;
pub mod memory_store;
pub mod test_db;
