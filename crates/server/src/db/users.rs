//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::{Role, UserId};

use super::RepositoryError;
use crate::models::user::{NewUser, UpdateProfile, UserWithLoft};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for the user plus registration-loft listing.
#[derive(Debug, sqlx::FromRow)]
struct UserWithLoftRow {
    id: i32,
    username: String,
    full_name: String,
    email: String,
    phone_number: String,
    role: String,
    created_at: DateTime<Utc>,
    latitude_dms: Option<String>,
    longitude_dms: Option<String>,
}

impl TryFrom<UserWithLoftRow> for UserWithLoft {
    type Error = RepositoryError;

    fn try_from(row: UserWithLoftRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;

        Ok(Self {
            user_id: UserId::new(row.id),
            username: row.username,
            full_name: row.full_name,
            email: row.email,
            phone_number: row.phone_number,
            role,
            created_at: row.created_at,
            latitude_dms: row.latitude_dms,
            longitude_dms: row.longitude_dms,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for member account database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a member account and its registration loft in one transaction.
    ///
    /// Either both rows commit or neither does: a failure on the loft insert
    /// rolls the account insert back, and dropping the transaction (e.g. on
    /// request cancellation) rolls back as well.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_loft(&self, new_user: &NewUser) -> Result<UserId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let user_id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.user (username, password_hash, full_name, email, phone_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(&new_user.full_name)
        .bind(&new_user.email)
        .bind(&new_user.phone_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        sqlx::query(
            r"
            INSERT INTO loftbook.loft (user_id, latitude_dms, longitude_dms, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user_id)
        .bind(&new_user.latitude_dms)
        .bind(&new_user.longitude_dms)
        .bind(new_user.latitude)
        .bind(new_user.longitude)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(UserId::new(user_id))
    }

    /// Get a member's password hash by username.
    ///
    /// Returns `None` if no such member exists. Callers must not reveal to
    /// clients whether it was the username or the password that failed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(UserId, String)>, RepositoryError> {
        let row: Option<(i32, String)> = sqlx::query_as(
            r"
            SELECT id, password_hash
            FROM loftbook.user
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(id, hash)| (UserId::new(id), hash)))
    }

    /// List all members joined with their registration loft.
    ///
    /// The registration loft is the member's oldest loft row; members without
    /// a loft appear with `NULL` coordinates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored role is invalid.
    pub async fn list_with_lofts(&self) -> Result<Vec<UserWithLoft>, RepositoryError> {
        let rows: Vec<UserWithLoftRow> = sqlx::query_as(
            r"
            SELECT DISTINCT ON (u.id)
                   u.id, u.username, u.full_name, u.email, u.phone_number,
                   u.role, u.created_at, l.latitude_dms, l.longitude_dms
            FROM loftbook.user u
            LEFT JOIN loftbook.loft l ON l.user_id = u.id
            ORDER BY u.id, l.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Update a member's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the member doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_profile(
        &self,
        id: UserId,
        update: &UpdateProfile,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE loftbook.user
            SET full_name = $1, email = $2, phone_number = $3
            WHERE id = $4
            ",
        )
        .bind(&update.full_name)
        .bind(&update.email)
        .bind(&update.phone_number)
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Count all members.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loftbook.user")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_maps_role() {
        let row = UserWithLoftRow {
            id: 7,
            username: "mara".to_string(),
            full_name: "Mara Santos".to_string(),
            email: "mara@example.com".to_string(),
            phone_number: String::new(),
            role: "admin".to_string(),
            created_at: Utc::now(),
            latitude_dms: Some("14:09:12.42 N".to_string()),
            longitude_dms: Some("121:15:58.30 E".to_string()),
        };

        let user = UserWithLoft::try_from(row).unwrap();
        assert_eq!(user.user_id, UserId::new(7));
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_row_conversion_rejects_unknown_role() {
        let row = UserWithLoftRow {
            id: 7,
            username: "mara".to_string(),
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            role: "overlord".to_string(),
            created_at: Utc::now(),
            latitude_dms: None,
            longitude_dms: None,
        };

        assert!(matches!(
            UserWithLoft::try_from(row),
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
