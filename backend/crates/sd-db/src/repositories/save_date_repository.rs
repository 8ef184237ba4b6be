//! Save-date repository: insert and read announcements.
//!
//! Records are append-only. `event_times` is stored as a JSON object in a
//! TEXT column and decoded on the way out.

use crate::{DbError, Result as DbErrorResult};

use sd_core::{EventTimes, NewSaveDate, SaveDate, TextLimits};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct SaveDateRow {
    id: i64,
    title: String,
    event_subtitle: Option<String>,
    event_summary: String,
    event_times: String,
    event_venue: String,
    event_address: String,
    event_city: String,
}

impl SaveDateRow {
    #[track_caller]
    fn into_save_date(self) -> DbErrorResult<SaveDate> {
        let event_times: EventTimes =
            serde_json::from_str(&self.event_times).map_err(|e| DbError::Serialization {
                message: format!(
                    "Invalid JSON in sd_save_dates.event_times (id {}): {}",
                    self.id, e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(SaveDate {
            id: self.id,
            title: self.title,
            event_subtitle: self.event_subtitle,
            event_summary: self.event_summary,
            event_times,
            event_venue: self.event_venue,
            event_address: self.event_address,
            event_city: self.event_city,
        })
    }
}

pub struct SaveDateRepository {
    pool: SqlitePool,
    limits: TextLimits,
}

impl SaveDateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_limits(pool, TextLimits::default())
    }

    pub fn with_limits(pool: SqlitePool, limits: TextLimits) -> Self {
        Self { pool, limits }
    }

    /// Insert a record and return it with its assigned id.
    ///
    /// The record is checked first; nothing is written if any field is
    /// invalid.
    pub async fn create(&self, new: NewSaveDate) -> DbErrorResult<SaveDate> {
        new.validate(&self.limits)?;

        let event_times =
            serde_json::to_string(&new.event_times).map_err(|e| DbError::Serialization {
                message: format!("Failed to encode event_times: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let result = sqlx::query(
            r#"
                INSERT INTO sd_save_dates (
                    title, event_subtitle, event_summary, event_times,
                    event_venue, event_address, event_city
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(&new.event_subtitle)
        .bind(&new.event_summary)
        .bind(&event_times)
        .bind(&new.event_venue)
        .bind(&new.event_address)
        .bind(&new.event_city)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted save-date {}", id);

        Ok(SaveDate::from_new(id, new))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<SaveDate>> {
        let row = sqlx::query_as::<_, SaveDateRow>(
            r#"
                SELECT id, title, event_subtitle, event_summary, event_times,
                    event_venue, event_address, event_city
                FROM sd_save_dates
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SaveDateRow::into_save_date).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<SaveDate>> {
        let rows = sqlx::query_as::<_, SaveDateRow>(
            r#"
                SELECT id, title, event_subtitle, event_summary, event_times,
                    event_venue, event_address, event_city
                FROM sd_save_dates
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(SaveDateRow::into_save_date)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sd_save_dates")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
