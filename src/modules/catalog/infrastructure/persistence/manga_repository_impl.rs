use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::{Manga, MangaRepository};
use crate::modules::catalog::infrastructure::models::{MangaModel, NewManga};
use crate::schema::manga;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct MangaRepositoryImpl {
    db: Arc<Database>,
}

impl MangaRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MangaRepository for MangaRepositoryImpl {
    async fn find_by_mal_id(&self, mal_id: i32) -> AppResult<Option<Manga>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<MangaModel>> {
            let mut conn = db.get_connection()?;
            let m = manga::table
                .filter(manga::mal_id.eq(mal_id))
                .select(MangaModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Manga::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manga>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<MangaModel>> {
            let mut conn = db.get_connection()?;
            let m = manga::table
                .find(id)
                .select(MangaModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Manga::from))
    }

    async fn insert_or_get(&self, entity: &Manga) -> AppResult<Manga> {
        let db = Arc::clone(&self.db);
        let new_manga = NewManga::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<MangaModel> {
            let mut conn = db.get_connection()?;
            let mal_id = new_manga.mal_id;

            let inserted = diesel::insert_into(manga::table)
                .values(&new_manga)
                .on_conflict(manga::mal_id)
                .do_nothing()
                .execute(&mut conn)?;

            if inserted == 0 {
                log_debug!("Title {} was catalogued concurrently, reusing stored row", mal_id);
            }

            let stored = manga::table
                .filter(manga::mal_id.eq(mal_id))
                .select(MangaModel::as_select())
                .first(&mut conn)?;
            Ok(stored)
        })
        .await??;

        Ok(Manga::from(model))
    }
}
