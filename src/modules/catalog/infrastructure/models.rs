use crate::modules::catalog::domain::Manga;
use crate::schema::manga;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = manga)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MangaModel {
    pub id: Uuid,
    pub mal_id: i32,
    pub title: String,
    pub cover_image: String,
    pub synopsis: String,
    pub author: String,
    pub published_from: Option<DateTime<Utc>>,
    pub score: f64,
    pub rating_total: i64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new titles. Aggregate columns are left to their zero defaults.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = manga)]
pub struct NewManga {
    pub id: Uuid,
    pub mal_id: i32,
    pub title: String,
    pub cover_image: String,
    pub synopsis: String,
    pub author: String,
    pub published_from: Option<DateTime<Utc>>,
}

impl From<MangaModel> for Manga {
    fn from(model: MangaModel) -> Self {
        Manga {
            id: model.id,
            mal_id: model.mal_id,
            title: model.title,
            cover_image: model.cover_image,
            synopsis: model.synopsis,
            author: model.author,
            published_from: model.published_from,
            score: model.score,
            rating_total: model.rating_total,
            review_count: model.review_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&Manga> for NewManga {
    fn from(entity: &Manga) -> Self {
        NewManga {
            id: entity.id,
            mal_id: entity.mal_id,
            title: entity.title.clone(),
            cover_image: entity.cover_image.clone(),
            synopsis: entity.synopsis.clone(),
            author: entity.author.clone(),
            published_from: entity.published_from,
        }
    }
}
