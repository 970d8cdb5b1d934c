use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_SYNOPSIS: &str = "No synopsis available";
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// A catalogued manga title.
///
/// `score`, `rating_total` and `review_count` are the aggregate fields
/// maintained by review transactions. A fresh title always starts at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manga {
    pub id: Uuid,
    pub mal_id: i32,
    pub title: String,
    pub cover_image: String,
    pub synopsis: String,
    pub author: String,
    pub published_from: Option<DateTime<Utc>>,
    pub score: f64,
    #[serde(skip)]
    pub rating_total: i64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reduced view of a title embedded in review and library listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaSummary {
    pub mal_id: i32,
    pub title: String,
    pub cover_image: String,
    pub score: f64,
}

impl Manga {
    pub fn new(mal_id: i32, title: String, cover_image: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            mal_id,
            title,
            cover_image,
            synopsis: DEFAULT_SYNOPSIS.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            published_from: None,
            score: 0.0,
            rating_total: 0,
            review_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_synopsis(mut self, synopsis: Option<String>) -> Self {
        if let Some(text) = synopsis.filter(|s| !s.trim().is_empty()) {
            self.synopsis = text;
        }
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        if let Some(name) = author.filter(|s| !s.trim().is_empty()) {
            self.author = name;
        }
        self
    }

    pub fn with_published_from(mut self, published_from: Option<DateTime<Utc>>) -> Self {
        self.published_from = published_from;
        self
    }

    pub fn summary(&self) -> MangaSummary {
        MangaSummary {
            mal_id: self.mal_id,
            title: self.title.clone(),
            cover_image: self.cover_image.clone(),
            score: self.score,
        }
    }
}
