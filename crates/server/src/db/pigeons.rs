//! Pigeon repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use loftbook_core::{PigeonId, UserId};

use super::{RepositoryError, map_foreign_key};
use crate::models::pigeon::{NewPigeon, Pigeon};

/// Internal row type for `PostgreSQL` pigeon queries.
#[derive(Debug, sqlx::FromRow)]
struct PigeonRow {
    id: i32,
    user_id: i32,
    ring_number: String,
    name: String,
    color: String,
    sex: String,
    breed: String,
    birth_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl From<PigeonRow> for Pigeon {
    fn from(row: PigeonRow) -> Self {
        Self {
            id: PigeonId::new(row.id),
            user_id: UserId::new(row.user_id),
            ring_number: row.ring_number,
            name: row.name,
            color: row.color,
            sex: row.sex,
            breed: row.breed,
            birth_date: row.birth_date,
            created_at: row.created_at,
        }
    }
}

/// Repository for pigeon database operations.
pub struct PigeonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PigeonRepository<'a> {
    /// Create a new pigeon repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a pigeon.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the ring number is taken.
    /// Returns `RepositoryError::ForeignKey` if the owner doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_pigeon: &NewPigeon) -> Result<PigeonId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.pigeon (user_id, ring_number, name, color, sex, breed, birth_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(new_pigeon.user_id.as_i32())
        .bind(&new_pigeon.ring_number)
        .bind(&new_pigeon.name)
        .bind(&new_pigeon.color)
        .bind(&new_pigeon.sex)
        .bind(&new_pigeon.breed)
        .bind(new_pigeon.birth_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("ring number already registered".to_owned());
            }
            map_foreign_key(e, "user")
        })?;

        Ok(PigeonId::new(id))
    }

    /// List all pigeons.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Pigeon>, RepositoryError> {
        let rows: Vec<PigeonRow> = sqlx::query_as(
            r"
            SELECT id, user_id, ring_number, name, color, sex, breed, birth_date, created_at
            FROM loftbook.pigeon
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count all pigeons.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loftbook.pigeon")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
