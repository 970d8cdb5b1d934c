pub mod manga_repository;
