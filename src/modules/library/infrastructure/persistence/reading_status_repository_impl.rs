use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::catalog::domain::Manga;
use crate::modules::catalog::infrastructure::models::MangaModel;
use crate::modules::library::domain::{
    LibraryEntry, ReadingEntry, ReadingStatus, ReadingStatusRepository,
};
use crate::modules::library::infrastructure::models::ReadingStatusModel;
use crate::schema::{manga, reading_statuses};
use crate::shared::domain::value_objects::UserId;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct ReadingStatusRepositoryImpl {
    db: Arc<Database>,
}

impl ReadingStatusRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadingStatusRepository for ReadingStatusRepositoryImpl {
    async fn upsert(&self, entry: &ReadingEntry) -> AppResult<ReadingEntry> {
        let db = Arc::clone(&self.db);
        let row = ReadingStatusModel::from(entry);

        let model = task::spawn_blocking(move || -> AppResult<ReadingStatusModel> {
            let mut conn = db.get_connection()?;
            let stored = diesel::insert_into(reading_statuses::table)
                .values(&row)
                .on_conflict((reading_statuses::user_id, reading_statuses::manga_id))
                .do_update()
                .set((
                    reading_statuses::status.eq(row.status),
                    reading_statuses::updated_at.eq(Utc::now()),
                ))
                .returning(ReadingStatusModel::as_returning())
                .get_result(&mut conn)?;
            Ok(stored)
        })
        .await??;

        Ok(ReadingEntry::from(model))
    }

    async fn find(&self, user_id: UserId, manga_id: Uuid) -> AppResult<Option<ReadingEntry>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<ReadingStatusModel>> {
            let mut conn = db.get_connection()?;
            let m = reading_statuses::table
                .filter(reading_statuses::user_id.eq(user_id.as_uuid()))
                .filter(reading_statuses::manga_id.eq(manga_id))
                .select(ReadingStatusModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(ReadingEntry::from))
    }

    async fn delete(&self, user_id: UserId, manga_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(
                reading_statuses::table
                    .filter(reading_statuses::user_id.eq(user_id.as_uuid()))
                    .filter(reading_statuses::manga_id.eq(manga_id)),
            )
            .execute(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(deleted > 0)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        status: Option<ReadingStatus>,
    ) -> AppResult<Vec<LibraryEntry>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(
            move || -> AppResult<Vec<(ReadingStatusModel, MangaModel)>> {
                let mut conn = db.get_connection()?;
                let mut query = reading_statuses::table
                    .inner_join(manga::table)
                    .filter(reading_statuses::user_id.eq(user_id.as_uuid()))
                    .select((ReadingStatusModel::as_select(), MangaModel::as_select()))
                    .into_boxed();
                if let Some(status) = status {
                    query = query.filter(reading_statuses::status.eq(status));
                }
                let rows = query
                    .order(reading_statuses::updated_at.desc())
                    .load::<(ReadingStatusModel, MangaModel)>(&mut conn)?;
                Ok(rows)
            },
        )
        .await??;

        Ok(rows
            .into_iter()
            .map(|(entry, manga)| LibraryEntry {
                status: entry.status,
                manga: Manga::from(manga).summary(),
                updated_at: entry.updated_at,
            })
            .collect())
    }
}
