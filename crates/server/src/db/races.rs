//! Race repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::RaceId;

use super::RepositoryError;
use crate::models::race::{NewRace, Race};

/// Internal row type for `PostgreSQL` race queries.
#[derive(Debug, sqlx::FromRow)]
struct RaceRow {
    id: i32,
    name: String,
    release_point: String,
    distance_km: f64,
    release_time: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<RaceRow> for Race {
    fn from(row: RaceRow) -> Self {
        Self {
            id: RaceId::new(row.id),
            name: row.name,
            release_point: row.release_point,
            distance_km: row.distance_km,
            release_time: row.release_time,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Repository for race database operations.
pub struct RaceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceRepository<'a> {
    /// Create a new race repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a race. New races start in the `scheduled` status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_race: &NewRace) -> Result<RaceId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.race (name, release_point, distance_km, release_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&new_race.name)
        .bind(&new_race.release_point)
        .bind(new_race.distance_km)
        .bind(new_race.release_time)
        .fetch_one(self.pool)
        .await?;

        Ok(RaceId::new(id))
    }

    /// List all races, most recent release first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Race>, RepositoryError> {
        let rows: Vec<RaceRow> = sqlx::query_as(
            r"
            SELECT id, name, release_point, distance_km, release_time, status, created_at
            FROM loftbook.race
            ORDER BY release_time DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count all races.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loftbook.race")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
