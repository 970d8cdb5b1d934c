/// Postgres-backed review store tests
///
/// These need a running server: set TEST_DATABASE_URL and run with
/// `--ignored`. Each test gets its own migrated database.
mod utils;

use std::sync::Arc;

use diesel::prelude::*;
use mangashelf_lib::modules::catalog::{Manga, MangaRepository, MangaRepositoryImpl};
use mangashelf_lib::modules::library::{
    LibraryService, ReadingStatus, ReadingStatusRepository, ReadingStatusRepositoryImpl,
};
use mangashelf_lib::modules::reviews::application::{
    CreateReviewCommand, DeleteReviewCommand, ListReviewsQuery, UpdateReviewCommand,
};
use mangashelf_lib::modules::reviews::domain::TransactionWork;
use mangashelf_lib::modules::reviews::{
    PgReviewStore, Rating, Review, ReviewService, ReviewSort, ReviewStore, ReviewTransaction,
};
use mangashelf_lib::schema::reviews;
use mangashelf_lib::shared::config::ReviewsConfig;
use mangashelf_lib::shared::domain::value_objects::UserId;
use mangashelf_lib::shared::errors::AppError;
use utils::factories::MangaFactory;
use utils::test_db::TestDb;

struct PgHarness {
    db: TestDb,
    manga_repo: Arc<dyn MangaRepository>,
    service: ReviewService,
    title: Manga,
}

async fn setup() -> PgHarness {
    let db = TestDb::new();
    let database = db.database();
    let manga_repo: Arc<dyn MangaRepository> =
        Arc::new(MangaRepositoryImpl::new(Arc::clone(&database)));
    let store: Arc<dyn ReviewStore> = Arc::new(PgReviewStore::new(database));
    let service = ReviewService::new(store, Arc::clone(&manga_repo), ReviewsConfig::default());

    let title = manga_repo
        .insert_or_get(&MangaFactory::new().mal_id(19).title("Monster").build())
        .await
        .unwrap();

    PgHarness {
        db,
        manga_repo,
        service,
        title,
    }
}

async fn stored(h: &PgHarness) -> Manga {
    h.manga_repo
        .find_by_mal_id(h.title.mal_id)
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn scenarios_a_through_d_against_postgres() {
    let h = setup().await;
    let (a, b) = (UserId::random(), UserId::random());

    let ra = h
        .service
        .create_review(CreateReviewCommand::new(19, Some(a), 8, "Tenma!"))
        .await
        .unwrap();
    let rb = h
        .service
        .create_review(CreateReviewCommand::new(19, Some(b), 4, "Slow start"))
        .await
        .unwrap();
    assert_eq!((rb.manga.score, rb.manga.review_count), (6.0, 2));

    h.service
        .update_review(UpdateReviewCommand::new(19, ra.review.id, Some(a)).rating(10))
        .await
        .unwrap();
    assert_eq!(stored(&h).await.score, 7.0);

    h.service
        .delete_review(DeleteReviewCommand::new(19, rb.review.id, Some(b)))
        .await
        .unwrap();
    let manga = stored(&h).await;
    assert_eq!((manga.score, manga.review_count), (10.0, 1));

    h.service
        .delete_review(DeleteReviewCommand::new(19, ra.review.id, Some(a)))
        .await
        .unwrap();
    let manga = stored(&h).await;
    assert_eq!((manga.score, manga.review_count, manga.rating_total), (0.0, 0, 0));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unique_constraint_surfaces_as_duplicate_review() {
    let h = setup().await;
    let user = UserId::random();
    h.service
        .create_review(CreateReviewCommand::new(19, Some(user), 6, "First"))
        .await
        .unwrap();

    let err = h
        .service
        .create_review(CreateReviewCommand::new(19, Some(user), 9, "Second"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateReview(_)));
    let manga = stored(&h).await;
    assert_eq!((manga.score, manga.review_count), (6.0, 1));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn failing_unit_of_work_rolls_back_review_insert() {
    let h = setup().await;
    let db_pool = h.db.pool();
    let user = UserId::random();

    // Fail after the review insert, where the aggregate write would happen.
    let store = PgReviewStore::new(h.db.database());
    let title = h.title.clone();
    let work: TransactionWork = Box::new(move |tx: &mut dyn ReviewTransaction| {
        let review = Review::new(title.id, user, Rating::new(5)?, "Will vanish".to_string(), false);
        tx.insert_review(&review)?;
        Err(AppError::TransientStoreError(
            "aggregate write failed".to_string(),
        ))
    });
    let err = store.transaction(work).await.unwrap_err();
    assert!(matches!(err, AppError::TransientStoreError(_)));

    let mut conn = db_pool.get().unwrap();
    let count: i64 = reviews::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
    assert_eq!(stored(&h).await.review_count, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires TEST_DATABASE_URL"]
async fn concurrent_creates_serialize_on_the_title_row() {
    let h = Arc::new(setup().await);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let h = Arc::clone(&h);
            tokio::spawn(async move {
                h.service
                    .create_review(CreateReviewCommand::new(
                        19,
                        Some(UserId::random()),
                        (i % 10) + 1,
                        "Concurrent",
                    ))
                    .await
            })
        })
        .collect();
    for handle in futures::future::join_all(handles).await {
        handle.unwrap().unwrap();
    }

    let manga = stored(&h).await;
    let expected_total: i64 = (0..16).map(|i| (i % 10) + 1).sum();
    assert_eq!(manga.review_count, 16);
    assert_eq!(manga.rating_total, expected_total);
    assert!((manga.score - expected_total as f64 / 16.0).abs() < 1e-9);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn listing_orders_and_pages_in_sql() {
    let h = setup().await;
    for rating in [3, 10, 6] {
        h.service
            .create_review(CreateReviewCommand::new(19, Some(UserId::random()), rating, "ok"))
            .await
            .unwrap();
    }

    let page = h
        .service
        .list_reviews(ListReviewsQuery::new(19).sort(ReviewSort::Highest).page_size(2))
        .await
        .unwrap();

    let ratings: Vec<u8> = page.reviews.iter().map(|r| r.rating.value()).collect();
    assert_eq!(ratings, vec![10, 6]);
    assert_eq!(page.total_reviews, 3);
    assert_eq!(page.total_pages, 2);
    assert!((page.average_score - 19.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn reading_status_upserts_per_user_and_title() {
    let h = setup().await;
    let status_repo: Arc<dyn ReadingStatusRepository> =
        Arc::new(ReadingStatusRepositoryImpl::new(h.db.database()));
    let library = LibraryService::new(status_repo, Arc::clone(&h.manga_repo));
    let user = Some(UserId::random());

    library
        .set_status(user, 19, ReadingStatus::Reading)
        .await
        .unwrap();
    library
        .set_status(user, 19, ReadingStatus::Completed)
        .await
        .unwrap();

    assert_eq!(
        library.get_status(user, 19).await.unwrap(),
        Some(ReadingStatus::Completed)
    );
    let completed = library
        .list_by_status(user.unwrap(), "completed")
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].manga.title, "Monster");
    assert!(library
        .list_by_status(user.unwrap(), "reading")
        .await
        .unwrap()
        .is_empty());

    assert!(library.remove_status(user, 19).await.unwrap());
    assert_eq!(library.get_status(user, 19).await.unwrap(), None);
}
