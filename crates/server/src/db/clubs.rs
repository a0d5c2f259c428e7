//! Club repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::ClubId;

use super::RepositoryError;
use crate::models::club::{Club, NewClub};

/// Internal row type for `PostgreSQL` club queries.
#[derive(Debug, sqlx::FromRow)]
struct ClubRow {
    id: i32,
    name: String,
    location: String,
    created_at: DateTime<Utc>,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Self {
            id: ClubId::new(row.id),
            name: row.name,
            location: row.location,
            created_at: row.created_at,
        }
    }
}

/// Repository for club database operations.
pub struct ClubRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClubRepository<'a> {
    /// Create a new club repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new club.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_club: &NewClub) -> Result<ClubId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.club (name, location)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(&new_club.name)
        .bind(&new_club.location)
        .fetch_one(self.pool)
        .await?;

        Ok(ClubId::new(id))
    }

    /// List all clubs.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Club>, RepositoryError> {
        let rows: Vec<ClubRow> = sqlx::query_as(
            r"
            SELECT id, name, location, created_at
            FROM loftbook.club
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count all clubs.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loftbook.club")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
