//! Loft repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::{LoftId, UserId};

use super::{RepositoryError, map_foreign_key};
use crate::models::loft::{Loft, NewLoft};

/// Internal row type for `PostgreSQL` loft queries.
#[derive(Debug, sqlx::FromRow)]
struct LoftRow {
    id: i32,
    user_id: i32,
    name: Option<String>,
    latitude_dms: Option<String>,
    longitude_dms: Option<String>,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

impl From<LoftRow> for Loft {
    fn from(row: LoftRow) -> Self {
        Self {
            id: LoftId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            latitude_dms: row.latitude_dms,
            longitude_dms: row.longitude_dms,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: row.created_at,
        }
    }
}

/// Repository for loft database operations.
pub struct LoftRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LoftRepository<'a> {
    /// Create a new loft repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Save an additional loft location from decimal coordinates.
    ///
    /// Registration lofts are created by
    /// [`UserRepository::create_with_loft`](super::users::UserRepository::create_with_loft)
    /// and carry the raw DMS notation; this path stores decimals only.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the owner doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_loft: &NewLoft) -> Result<LoftId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.loft (user_id, name, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(new_loft.user_id.as_i32())
        .bind(&new_loft.name)
        .bind(new_loft.latitude)
        .bind(new_loft.longitude)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_foreign_key(e, "user"))?;

        Ok(LoftId::new(id))
    }

    /// List all lofts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Loft>, RepositoryError> {
        let rows: Vec<LoftRow> = sqlx::query_as(
            r"
            SELECT id, user_id, name, latitude_dms, longitude_dms,
                   latitude, longitude, created_at
            FROM loftbook.loft
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
