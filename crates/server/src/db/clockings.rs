//! Clocking repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::{ClockingId, DeviceId, PigeonId, RaceId, UserId};

use super::{RepositoryError, map_foreign_key};
use crate::models::clocking::{Clocking, NewClocking};

/// Internal row type for `PostgreSQL` clocking queries.
#[derive(Debug, sqlx::FromRow)]
struct ClockingRow {
    id: i32,
    pigeon_id: i32,
    race_id: i32,
    user_id: i32,
    device_id: Option<i32>,
    arrival_time: DateTime<Utc>,
    speed_kph: Option<f64>,
    created_at: DateTime<Utc>,
}

impl From<ClockingRow> for Clocking {
    fn from(row: ClockingRow) -> Self {
        Self {
            id: ClockingId::new(row.id),
            pigeon_id: PigeonId::new(row.pigeon_id),
            race_id: RaceId::new(row.race_id),
            user_id: UserId::new(row.user_id),
            device_id: row.device_id.map(DeviceId::new),
            arrival_time: row.arrival_time,
            speed_kph: row.speed_kph,
            created_at: row.created_at,
        }
    }
}

/// Repository for clocking database operations.
pub struct ClockingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClockingRepository<'a> {
    /// Create a new clocking repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record an arrival clocking.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if a referenced row doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, clocking: &NewClocking) -> Result<ClockingId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.clocking
                (pigeon_id, race_id, user_id, device_id, arrival_time, speed_kph)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(clocking.pigeon_id.as_i32())
        .bind(clocking.race_id.as_i32())
        .bind(clocking.user_id.as_i32())
        .bind(clocking.device_id.map(|d| d.as_i32()))
        .bind(clocking.arrival_time)
        .bind(clocking.speed_kph)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_foreign_key(e, "pigeon, race, user or device"))?;

        Ok(ClockingId::new(id))
    }

    /// List clockings, optionally restricted to one race, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, race_id: Option<RaceId>) -> Result<Vec<Clocking>, RepositoryError> {
        let rows: Vec<ClockingRow> = sqlx::query_as(
            r"
            SELECT id, pigeon_id, race_id, user_id, device_id,
                   arrival_time, speed_kph, created_at
            FROM loftbook.clocking
            WHERE $1::INT IS NULL OR race_id = $1
            ORDER BY arrival_time
            ",
        )
        .bind(race_id.map(|r| r.as_i32()))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
