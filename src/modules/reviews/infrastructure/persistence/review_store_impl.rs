use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;
use uuid::Uuid;

use crate::modules::catalog::domain::Manga;
use crate::modules::catalog::infrastructure::models::MangaModel;
use crate::modules::reviews::domain::{
    Review, ReviewCommit, ReviewSort, ReviewStore, ReviewTransaction, ScoreAggregate,
    TransactionWork, UserReview,
};
use crate::modules::reviews::infrastructure::models::{NewReview, ReviewChangeset, ReviewModel};
use crate::schema::{manga, reviews};
use crate::shared::application::pagination::PaginationParams;
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::shared::Database;

/// Postgres-backed review store.
///
/// Each transaction runs at READ COMMITTED and takes a `FOR UPDATE` lock on
/// the title row before touching reviews, so writers on one title queue
/// behind each other while other titles proceed in parallel. The lock wait
/// is bounded by the configured `lock_timeout`.
pub struct PgReviewStore {
    db: Arc<Database>,
}

impl PgReviewStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn transaction(&self, work: TransactionWork) -> AppResult<ReviewCommit> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<ReviewCommit> {
            let timer = TimedOperation::new("review_transaction");
            let lock_timeout_ms = db.lock_timeout().as_millis() as u64;
            let mut conn = db.get_connection()?;

            let result = conn
                .build_transaction()
                .read_committed()
                .run::<_, AppError, _>(|conn| {
                    diesel::sql_query(format!("SET LOCAL lock_timeout = {}", lock_timeout_ms))
                        .execute(conn)?;
                    let mut tx = PgReviewTransaction { conn };
                    work(&mut tx)
                });

            timer.finish();
            result
        })
        .await?
    }

    async fn list_for_manga(
        &self,
        manga_id: Uuid,
        sort: ReviewSort,
        pagination: PaginationParams,
    ) -> AppResult<Vec<Review>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let query = reviews::table
                .filter(reviews::manga_id.eq(manga_id))
                .select(ReviewModel::as_select())
                .into_boxed();

            let query = match sort {
                ReviewSort::Newest => query.order((reviews::created_at.desc(), reviews::id.desc())),
                ReviewSort::Oldest => query.order((reviews::created_at.asc(), reviews::id.asc())),
                ReviewSort::Highest => query.order((
                    reviews::rating.desc(),
                    reviews::created_at.desc(),
                    reviews::id.desc(),
                )),
                ReviewSort::Lowest => query.order((
                    reviews::rating.asc(),
                    reviews::created_at.desc(),
                    reviews::id.desc(),
                )),
            };

            let rows = query
                .offset(pagination.offset())
                .limit(pagination.limit())
                .load::<ReviewModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        models.into_iter().map(Review::try_from).collect()
    }

    async fn count_for_manga(&self, manga_id: Uuid) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let count = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count = reviews::table
                .filter(reviews::manga_id.eq(manga_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await??;

        Ok(count.max(0) as u64)
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<UserReview>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<(ReviewModel, MangaModel)>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .inner_join(manga::table)
                .filter(reviews::user_id.eq(user_id.as_uuid()))
                .order((reviews::created_at.desc(), reviews::id.desc()))
                .select((ReviewModel::as_select(), MangaModel::as_select()))
                .load::<(ReviewModel, MangaModel)>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        rows.into_iter()
            .map(|(review, manga)| {
                Ok(UserReview {
                    review: Review::try_from(review)?,
                    manga: Manga::from(manga).summary(),
                })
            })
            .collect()
    }
}

struct PgReviewTransaction<'a> {
    conn: &'a mut PgConnection,
}

impl ReviewTransaction for PgReviewTransaction<'_> {
    fn lock_manga(&mut self, mal_id: i32) -> AppResult<Option<Manga>> {
        LogContext::db_operation("lock", "manga", None);
        let model = manga::table
            .filter(manga::mal_id.eq(mal_id))
            .select(MangaModel::as_select())
            .for_update()
            .first(self.conn)
            .optional()?;
        Ok(model.map(Manga::from))
    }

    fn find_review(&mut self, manga_id: Uuid, review_id: Uuid) -> AppResult<Option<Review>> {
        let model = reviews::table
            .filter(reviews::id.eq(review_id))
            .filter(reviews::manga_id.eq(manga_id))
            .select(ReviewModel::as_select())
            .first(self.conn)
            .optional()?;
        model.map(Review::try_from).transpose()
    }

    fn insert_review(&mut self, review: &Review) -> AppResult<()> {
        let inserted = diesel::insert_into(reviews::table)
            .values(NewReview::from(review))
            .execute(self.conn);

        match inserted {
            Ok(_) => Ok(()),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => Err(
                AppError::DuplicateReview("You have already reviewed this manga".to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    fn update_review(&mut self, review: &Review) -> AppResult<()> {
        let updated = diesel::update(reviews::table.find(review.id))
            .set(ReviewChangeset::from(review))
            .execute(self.conn)?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("Review {} not found", review.id)));
        }
        Ok(())
    }

    fn delete_review(&mut self, review_id: Uuid) -> AppResult<()> {
        let deleted = diesel::delete(reviews::table.find(review_id)).execute(self.conn)?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Review {} not found", review_id)));
        }
        Ok(())
    }

    fn write_aggregate(&mut self, manga_id: Uuid, aggregate: &ScoreAggregate) -> AppResult<()> {
        LogContext::db_operation("write_aggregate", "manga", None);
        let updated = diesel::update(manga::table.find(manga_id))
            .set((
                manga::score.eq(aggregate.score()),
                manga::rating_total.eq(aggregate.rating_total()),
                manga::review_count.eq(aggregate.review_count()),
                manga::updated_at.eq(Utc::now()),
            ))
            .execute(self.conn)?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("Manga {} not found", manga_id)));
        }
        Ok(())
    }
}
