use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::library::domain::{ReadingEntry, ReadingStatus};
use crate::schema::reading_statuses;
use crate::shared::domain::value_objects::UserId;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = reading_statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReadingStatusModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub manga_id: Uuid,
    pub status: ReadingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReadingStatusModel> for ReadingEntry {
    fn from(model: ReadingStatusModel) -> Self {
        ReadingEntry {
            id: model.id,
            user_id: UserId::new(model.user_id),
            manga_id: model.manga_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&ReadingEntry> for ReadingStatusModel {
    fn from(entry: &ReadingEntry) -> Self {
        ReadingStatusModel {
            id: entry.id,
            user_id: entry.user_id.as_uuid(),
            manga_id: entry.manga_id,
            status: entry.status,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
