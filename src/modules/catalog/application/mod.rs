pub mod ports;
pub mod service;

pub use ports::{CatalogClient, CatalogManga};
pub use service::CatalogService;
