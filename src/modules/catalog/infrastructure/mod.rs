pub mod http_client;
pub mod jikan;
pub mod models;
pub mod persistence;

pub use jikan::JikanCatalogClient;
pub use persistence::MangaRepositoryImpl;
