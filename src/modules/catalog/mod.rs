/// Catalog bounded context
///
/// Owns the Manga title records. Titles are created lazily the first time
/// they are looked up in the external catalog; their aggregate score fields
/// belong to the reviews context and are never written from here.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CatalogClient, CatalogManga, CatalogService};
pub use domain::{Manga, MangaRepository, MangaSummary};
pub use infrastructure::{JikanCatalogClient, MangaRepositoryImpl};
