use chrono::{DateTime, Utc};

use super::dto::JikanMangaData;
use crate::modules::catalog::application::CatalogManga;

pub struct JikanMapper;

impl JikanMapper {
    pub fn to_catalog(data: JikanMangaData) -> CatalogManga {
        // English title when present, otherwise the default romanized one
        let title = data
            .title_english
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(data.title);

        let cover_image = data
            .images
            .jpg
            .image_url
            .or(data.images.jpg.large_image_url)
            .unwrap_or_default();

        CatalogManga {
            mal_id: data.mal_id,
            title,
            cover_image,
            synopsis: data.synopsis,
            author: data.authors.into_iter().next().map(|a| a.name),
            published_from: data
                .published
                .and_then(|p| p.from)
                .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            external_score: data.score,
        }
    }
}
