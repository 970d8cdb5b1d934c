/// Test data factories and service wiring
use std::sync::Arc;

use mangashelf_lib::modules::catalog::domain::{Manga, MangaRepository};
use mangashelf_lib::modules::reviews::application::{
    CreateReviewCommand, DeleteReviewCommand, UpdateReviewCommand,
};
use mangashelf_lib::modules::reviews::{ReviewCommit, ReviewService, ReviewStore};
use mangashelf_lib::shared::config::ReviewsConfig;
use mangashelf_lib::shared::domain::value_objects::UserId;
use mangashelf_lib::shared::errors::AppResult;
use uuid::Uuid;

use super::memory_store::InMemoryStore;

pub struct MangaFactory {
    mal_id: i32,
    title: String,
    cover_image: String,
}

impl Default for MangaFactory {
    fn default() -> Self {
        let mal_id = (rand::random::<u32>() % 1_000_000 + 1) as i32;
        Self {
            mal_id,
            title: format!("Test Manga {}", mal_id),
            cover_image: format!("https://cdn.example.test/{}.jpg", mal_id),
        }
    }
}

impl MangaFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mal_id(mut self, mal_id: i32) -> Self {
        self.mal_id = mal_id;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn build(self) -> Manga {
        Manga::new(self.mal_id, self.title, self.cover_image)
    }
}

/// Review service over an in-memory store seeded with one title.
pub struct ReviewHarness {
    pub store: Arc<InMemoryStore>,
    pub service: ReviewService,
    pub mal_id: i32,
}

impl ReviewHarness {
    pub fn new() -> Self {
        Self::with_config(ReviewsConfig::default())
    }

    pub fn with_config(config: ReviewsConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let manga = store.add_title(MangaFactory::new().mal_id(1).title("Monster").build());

        let review_store: Arc<dyn ReviewStore> = store.clone();
        let manga_repo: Arc<dyn MangaRepository> = store.clone();
        let service = ReviewService::new(review_store, manga_repo, config);

        Self {
            store,
            service,
            mal_id: manga.mal_id,
        }
    }

    pub async fn create(&self, user: UserId, rating: i32) -> AppResult<ReviewCommit> {
        self.service
            .create_review(CreateReviewCommand::new(
                self.mal_id,
                Some(user),
                rating,
                format!("Rated {}", rating),
            ))
            .await
    }

    pub async fn rerate(&self, user: UserId, review_id: Uuid, rating: i32) -> AppResult<ReviewCommit> {
        self.service
            .update_review(UpdateReviewCommand::new(self.mal_id, review_id, Some(user)).rating(rating))
            .await
    }

    pub async fn delete(&self, user: UserId, review_id: Uuid) -> AppResult<ReviewCommit> {
        self.service
            .delete_review(DeleteReviewCommand::new(self.mal_id, review_id, Some(user)))
            .await
    }

    /// Committed (score, review_count) of the seeded title.
    pub fn aggregate(&self) -> (f64, i32) {
        let manga = self.store.title(self.mal_id);
        (manga.score, manga.review_count)
    }

    /// Assert the stored score is the mean of the stored ratings.
    pub fn assert_mean_identity(&self) {
        let ratings = self.store.ratings_for(self.mal_id);
        let manga = self.store.title(self.mal_id);
        assert_eq!(manga.review_count as usize, ratings.len());
        let expected = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64
        };
        assert!(
            (manga.score - expected).abs() < 1e-9,
            "score {} != mean {} of {:?}",
            manga.score,
            expected,
            ratings
        );
    }
}
