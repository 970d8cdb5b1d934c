/// Review listing tests over the in-memory store
///
/// Tests cover:
/// - Sort modes and their tie-breaking
/// - Page bounds, clamping and navigation flags
/// - Per-user listings carrying the reviewed title
mod utils;

use mangashelf_lib::modules::reviews::application::ListReviewsQuery;
use mangashelf_lib::modules::reviews::ReviewSort;
use mangashelf_lib::shared::config::ReviewsConfig;
use mangashelf_lib::shared::domain::value_objects::UserId;
use mangashelf_lib::shared::errors::AppError;
use utils::factories::{MangaFactory, ReviewHarness};

/// Seed one review per rating, created in the given order.
async fn seed(h: &ReviewHarness, ratings: &[i32]) {
    for &rating in ratings {
        h.create(UserId::random(), rating).await.unwrap();
        // Distinct creation instants keep time ordering deterministic.
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }
}

fn ratings(page: &mangashelf_lib::modules::reviews::application::ReviewPage) -> Vec<u8> {
    page.reviews.iter().map(|r| r.rating.value()).collect()
}

#[tokio::test]
async fn sorts_by_time_and_rating() {
    let h = ReviewHarness::new();
    seed(&h, &[5, 9, 2, 9]).await;

    let newest = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id))
        .await
        .unwrap();
    assert_eq!(ratings(&newest), vec![9, 2, 9, 5]);

    let oldest = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).sort(ReviewSort::Oldest))
        .await
        .unwrap();
    assert_eq!(ratings(&oldest), vec![5, 9, 2, 9]);

    let highest = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).sort(ReviewSort::Highest))
        .await
        .unwrap();
    assert_eq!(ratings(&highest), vec![9, 9, 5, 2]);
    // Equal ratings: newest first
    assert!(highest.reviews[0].created_at > highest.reviews[1].created_at);

    let lowest = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).sort(ReviewSort::Lowest))
        .await
        .unwrap();
    assert_eq!(ratings(&lowest), vec![2, 5, 9, 9]);
}

#[tokio::test]
async fn unknown_sort_string_falls_back_to_newest() {
    let h = ReviewHarness::new();
    seed(&h, &[3, 8]).await;

    let page = h
        .service
        .list_reviews(
            ListReviewsQuery::new(h.mal_id).sort(ReviewSort::from_param(Some("popular"))),
        )
        .await
        .unwrap();
    assert_eq!(ratings(&page), vec![8, 3]);
}

#[tokio::test]
async fn pages_carry_totals_and_average() {
    let h = ReviewHarness::new();
    seed(&h, &[1, 2, 3, 4, 5]).await;

    let first = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).page_size(2))
        .await
        .unwrap();
    assert_eq!(first.reviews.len(), 2);
    assert_eq!(first.total_reviews, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.current_page, 1);
    assert_eq!(first.average_score, 3.0);
    assert!(first.has_next_page);
    assert!(!first.has_prev_page);

    let last = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).page(3).page_size(2))
        .await
        .unwrap();
    assert_eq!(ratings(&last), vec![1]);
    assert!(!last.has_next_page);
    assert!(last.has_prev_page);

    let beyond = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).page(9).page_size(2))
        .await
        .unwrap();
    assert!(beyond.reviews.is_empty());
    assert_eq!(beyond.total_reviews, 5);
}

#[tokio::test]
async fn page_size_is_defaulted_and_clamped() {
    let h = ReviewHarness::with_config(ReviewsConfig {
        default_page_size: 2,
        max_page_size: 3,
    });
    seed(&h, &[4, 4, 4, 4, 4]).await;

    let defaulted = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id))
        .await
        .unwrap();
    assert_eq!(defaulted.reviews.len(), 2);

    let clamped = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).page_size(100))
        .await
        .unwrap();
    assert_eq!(clamped.reviews.len(), 3);
    assert_eq!(clamped.total_pages, 2);
}

#[tokio::test]
async fn empty_title_lists_nothing_with_zero_score() {
    let h = ReviewHarness::new();
    let page = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id))
        .await
        .unwrap();

    assert!(page.reviews.is_empty());
    assert_eq!(page.total_reviews, 0);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.average_score, 0.0);
}

#[tokio::test]
async fn unknown_title_and_page_zero_are_rejected() {
    let h = ReviewHarness::new();

    let err = h
        .service
        .list_reviews(ListReviewsQuery::new(4242))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = h
        .service
        .list_reviews(ListReviewsQuery::new(h.mal_id).page(0))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn user_reviews_span_titles_newest_first() {
    let h = ReviewHarness::new();
    let other = h
        .store
        .add_title(MangaFactory::new().mal_id(2).title("20th Century Boys").build());
    let user = UserId::random();

    h.create(user, 7).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    h.service
        .create_review(
            mangashelf_lib::modules::reviews::application::CreateReviewCommand::new(
                other.mal_id,
                Some(user),
                9,
                "Kenji!",
            ),
        )
        .await
        .unwrap();
    h.create(UserId::random(), 1).await.unwrap();

    let reviews = h.service.list_user_reviews(user).await.unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].manga.title, "20th Century Boys");
    assert_eq!(reviews[0].manga.score, 9.0);
    assert_eq!(reviews[1].manga.mal_id, h.mal_id);
    assert!(reviews.iter().all(|r| r.review.user_id == user));
}
