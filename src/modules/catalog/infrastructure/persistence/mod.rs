pub mod manga_repository_impl;

pub use manga_repository_impl::MangaRepositoryImpl;
