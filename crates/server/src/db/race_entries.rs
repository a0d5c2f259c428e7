//! Race entry repository for database operations.

use sqlx::PgPool;

use loftbook_core::RaceEntryId;

use super::{RepositoryError, map_foreign_key};
use crate::models::race::NewRaceEntry;

/// Repository for race entry database operations.
pub struct RaceEntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceEntryRepository<'a> {
    /// Create a new race entry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Enter a pigeon into a race.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the pigeon is already entered.
    /// Returns `RepositoryError::ForeignKey` if the race or pigeon doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, entry: NewRaceEntry) -> Result<RaceEntryId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.race_entry (race_id, pigeon_id)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(entry.race_id.as_i32())
        .bind(entry.pigeon_id.as_i32())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(
                    "pigeon already entered in this race".to_owned(),
                );
            }
            map_foreign_key(e, "race or pigeon")
        })?;

        Ok(RaceEntryId::new(id))
    }
}
