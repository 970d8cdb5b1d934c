use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;

/// Title data as reported by the external catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogManga {
    pub mal_id: i32,
    pub title: String,
    pub cover_image: String,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub published_from: Option<DateTime<Utc>>,
    /// Community score on the external site, shown in search results only.
    pub external_score: Option<f32>,
}

/// Port (interface) for the external manga catalog
/// Infrastructure layer implements this (Jikan by default)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one title; `None` when the catalog does not know the id
    async fn fetch_manga(&self, mal_id: i32) -> AppResult<Option<CatalogManga>>;

    /// Free-text search
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<CatalogManga>>;
}
