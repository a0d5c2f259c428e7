//! Race result repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::{PigeonId, RaceId, RaceResultId};

use super::{RepositoryError, map_foreign_key};
use crate::models::race::{NewRaceResult, RaceResult};

/// Internal row type for `PostgreSQL` race result queries.
#[derive(Debug, sqlx::FromRow)]
struct RaceResultRow {
    id: i32,
    race_id: i32,
    pigeon_id: i32,
    speed_kph: f64,
    arrival_time: DateTime<Utc>,
    rank: i32,
    created_at: DateTime<Utc>,
}

impl From<RaceResultRow> for RaceResult {
    fn from(row: RaceResultRow) -> Self {
        Self {
            id: RaceResultId::new(row.id),
            race_id: RaceId::new(row.race_id),
            pigeon_id: PigeonId::new(row.pigeon_id),
            speed_kph: row.speed_kph,
            arrival_time: row.arrival_time,
            rank: row.rank,
            created_at: row.created_at,
        }
    }
}

/// Repository for race result database operations.
pub struct RaceResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceResultRepository<'a> {
    /// Create a new race result repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a final result for one pigeon in one race.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the pigeon already has a result
    /// for this race.
    /// Returns `RepositoryError::ForeignKey` if the race or pigeon doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, result: &NewRaceResult) -> Result<RaceResultId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.race_result (race_id, pigeon_id, speed_kph, arrival_time, rank)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(result.race_id.as_i32())
        .bind(result.pigeon_id.as_i32())
        .bind(result.speed_kph)
        .bind(result.arrival_time)
        .bind(result.rank)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(
                    "result already recorded for this pigeon".to_owned(),
                );
            }
            map_foreign_key(e, "race or pigeon")
        })?;

        Ok(RaceResultId::new(id))
    }

    /// List results, optionally restricted to one race, in rank order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, race_id: Option<RaceId>) -> Result<Vec<RaceResult>, RepositoryError> {
        let rows: Vec<RaceResultRow> = sqlx::query_as(
            r"
            SELECT id, race_id, pigeon_id, speed_kph, arrival_time, rank, created_at
            FROM loftbook.race_result
            WHERE $1::INT IS NULL OR race_id = $1
            ORDER BY race_id, rank
            ",
        )
        .bind(race_id.map(|r| r.as_i32()))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
