pub mod modules;
pub mod schema;
pub mod shared;

use modules::{
    catalog::{
        CatalogClient, CatalogService, JikanCatalogClient, MangaRepository, MangaRepositoryImpl,
    },
    library::{LibraryService, ReadingStatusRepository, ReadingStatusRepositoryImpl},
    reviews::{PgReviewStore, ReviewService, ReviewStore},
};
use shared::errors::AppResult;
use shared::{AppConfig, Database};
use std::sync::Arc;

/// Services the request layer calls into.
pub struct AppState {
    pub database: Arc<Database>,
    pub catalog_service: Arc<CatalogService>,
    pub review_service: Arc<ReviewService>,
    pub library_service: Arc<LibraryService>,
}

impl AppState {
    /// Wire repositories and services over an existing pool.
    pub fn new(database: Arc<Database>, config: &AppConfig) -> AppResult<Self> {
        let manga_repo: Arc<dyn MangaRepository> =
            Arc::new(MangaRepositoryImpl::new(Arc::clone(&database)));
        let review_store: Arc<dyn ReviewStore> =
            Arc::new(PgReviewStore::new(Arc::clone(&database)));
        let status_repo: Arc<dyn ReadingStatusRepository> =
            Arc::new(ReadingStatusRepositoryImpl::new(Arc::clone(&database)));
        let catalog_client: Arc<dyn CatalogClient> =
            Arc::new(JikanCatalogClient::new(&config.catalog)?);

        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&manga_repo),
            catalog_client,
        ));
        let review_service = Arc::new(ReviewService::new(
            review_store,
            Arc::clone(&manga_repo),
            config.reviews,
        ));
        let library_service = Arc::new(LibraryService::new(status_repo, manga_repo));

        Ok(Self {
            database,
            catalog_service,
            review_service,
            library_service,
        })
    }
}

/// Connect to the database, apply pending migrations and build the services.
pub fn bootstrap(config: &AppConfig) -> AppResult<AppState> {
    let database = Arc::new(Database::connect(&config.database)?);
    database.run_migrations()?;
    AppState::new(database, config)
}
