/// In-memory review store for scenario and property tests
///
/// A transaction works on a copy of the tables while holding the store lock
/// and swaps the copy in only when the unit of work succeeds, so a failed
/// transaction leaves nothing behind. Holding the lock for the whole unit of
/// work serializes transactions the way a title row lock does in Postgres.
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use mangashelf_lib::modules::catalog::domain::{Manga, MangaRepository};
use mangashelf_lib::modules::reviews::domain::{
    Review, ReviewCommit, ReviewSort, ReviewStore, ReviewTransaction, ScoreAggregate,
    TransactionWork, UserReview,
};
use mangashelf_lib::shared::application::pagination::PaginationParams;
use mangashelf_lib::shared::domain::value_objects::UserId;
use mangashelf_lib::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
struct Tables {
    manga: HashMap<Uuid, Manga>,
    reviews: HashMap<Uuid, Review>,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fail_aggregate_writes: AtomicBool,
    aggregate_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_title(&self, manga: Manga) -> Manga {
        let mut tables = self.tables.lock().unwrap();
        tables.manga.insert(manga.id, manga.clone());
        manga
    }

    /// Committed state of a title.
    pub fn title(&self, mal_id: i32) -> Manga {
        let tables = self.tables.lock().unwrap();
        tables
            .manga
            .values()
            .find(|m| m.mal_id == mal_id)
            .cloned()
            .unwrap_or_else(|| panic!("title {} not seeded", mal_id))
    }

    /// Ratings of all committed reviews for a title.
    pub fn ratings_for(&self, mal_id: i32) -> Vec<u8> {
        let manga_id = self.title(mal_id).id;
        let tables = self.tables.lock().unwrap();
        tables
            .reviews
            .values()
            .filter(|r| r.manga_id == manga_id)
            .map(|r| r.rating.value())
            .collect()
    }

    pub fn review(&self, review_id: Uuid) -> Option<Review> {
        self.tables.lock().unwrap().reviews.get(&review_id).cloned()
    }

    /// Make every following aggregate write fail, after the review write in
    /// the same transaction has already been applied.
    pub fn fail_aggregate_writes(&self, fail: bool) {
        self.fail_aggregate_writes.store(fail, Ordering::SeqCst);
    }

    pub fn aggregate_writes(&self) -> usize {
        self.aggregate_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewStore for InMemoryStore {
    async fn transaction(&self, work: TransactionWork) -> AppResult<ReviewCommit> {
        let mut committed = self.tables.lock().unwrap();
        let mut working = committed.clone();

        let result = {
            let mut tx = MemoryTransaction {
                tables: &mut working,
                fail_aggregate: self.fail_aggregate_writes.load(Ordering::SeqCst),
                aggregate_writes: &self.aggregate_writes,
            };
            work(&mut tx)
        };

        if result.is_ok() {
            *committed = working;
        }
        result
    }

    async fn list_for_manga(
        &self,
        manga_id: Uuid,
        sort: ReviewSort,
        pagination: PaginationParams,
    ) -> AppResult<Vec<Review>> {
        let tables = self.tables.lock().unwrap();
        let mut reviews: Vec<Review> = tables
            .reviews
            .values()
            .filter(|r| r.manga_id == manga_id)
            .cloned()
            .collect();

        reviews.sort_by(|a, b| {
            let newest_first = b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id));
            match sort {
                ReviewSort::Newest => newest_first,
                ReviewSort::Oldest => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
                ReviewSort::Highest => b.rating.cmp(&a.rating).then(newest_first),
                ReviewSort::Lowest => a.rating.cmp(&b.rating).then(newest_first),
            }
        });

        Ok(reviews
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn count_for_manga(&self, manga_id: Uuid) -> AppResult<u64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .reviews
            .values()
            .filter(|r| r.manga_id == manga_id)
            .count() as u64)
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<UserReview>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<UserReview> = tables
            .reviews
            .values()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                tables.manga.get(&r.manga_id).map(|m| UserReview {
                    review: r.clone(),
                    manga: m.summary(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));
        Ok(rows)
    }
}

#[async_trait]
impl MangaRepository for InMemoryStore {
    async fn find_by_mal_id(&self, mal_id: i32) -> AppResult<Option<Manga>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.manga.values().find(|m| m.mal_id == mal_id).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manga>> {
        Ok(self.tables.lock().unwrap().manga.get(&id).cloned())
    }

    async fn insert_or_get(&self, manga: &Manga) -> AppResult<Manga> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.manga.values().find(|m| m.mal_id == manga.mal_id) {
            return Ok(existing.clone());
        }
        tables.manga.insert(manga.id, manga.clone());
        Ok(manga.clone())
    }
}

struct MemoryTransaction<'a> {
    tables: &'a mut Tables,
    fail_aggregate: bool,
    aggregate_writes: &'a AtomicUsize,
}

impl ReviewTransaction for MemoryTransaction<'_> {
    fn lock_manga(&mut self, mal_id: i32) -> AppResult<Option<Manga>> {
        Ok(self
            .tables
            .manga
            .values()
            .find(|m| m.mal_id == mal_id)
            .cloned())
    }

    fn find_review(&mut self, manga_id: Uuid, review_id: Uuid) -> AppResult<Option<Review>> {
        Ok(self
            .tables
            .reviews
            .get(&review_id)
            .filter(|r| r.manga_id == manga_id)
            .cloned())
    }

    fn insert_review(&mut self, review: &Review) -> AppResult<()> {
        let duplicate = self
            .tables
            .reviews
            .values()
            .any(|r| r.user_id == review.user_id && r.manga_id == review.manga_id);
        if duplicate {
            return Err(AppError::DuplicateReview(
                "You have already reviewed this manga".to_string(),
            ));
        }
        self.tables.reviews.insert(review.id, review.clone());
        Ok(())
    }

    fn update_review(&mut self, review: &Review) -> AppResult<()> {
        match self.tables.reviews.get_mut(&review.id) {
            Some(stored) => {
                *stored = review.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Review {} not found", review.id))),
        }
    }

    fn delete_review(&mut self, review_id: Uuid) -> AppResult<()> {
        self.tables
            .reviews
            .remove(&review_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review_id)))
    }

    fn write_aggregate(&mut self, manga_id: Uuid, aggregate: &ScoreAggregate) -> AppResult<()> {
        if self.fail_aggregate {
            return Err(AppError::TransientStoreError(
                "simulated aggregate write failure".to_string(),
            ));
        }
        let manga = self
            .tables
            .manga
            .get_mut(&manga_id)
            .ok_or_else(|| AppError::NotFound(format!("Manga {} not found", manga_id)))?;
        aggregate.write_to(manga);
        self.aggregate_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
