use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::MangaSummary;
use crate::modules::library::domain::value_objects::reading_status::ReadingStatus;
use crate::shared::domain::value_objects::UserId;

/// A user's reading status for one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub manga_id: Uuid,
    pub status: ReadingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReadingEntry {
    pub fn new(user_id: UserId, manga_id: Uuid, status: ReadingStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            manga_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Library listing row: status plus the title it refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    pub status: ReadingStatus,
    pub manga: MangaSummary,
    pub updated_at: DateTime<Utc>,
}
