pub mod entities;
pub mod repositories;

pub use entities::manga::{Manga, MangaSummary};
pub use repositories::manga_repository::MangaRepository;
