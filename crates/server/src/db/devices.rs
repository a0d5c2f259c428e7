//! Clocking device repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::{DeviceId, UserId};

use super::{RepositoryError, map_foreign_key};
use crate::models::device::{Device, NewDevice};

/// Internal row type for `PostgreSQL` device queries.
#[derive(Debug, sqlx::FromRow)]
struct DeviceRow {
    id: i32,
    user_id: i32,
    name: String,
    serial_number: String,
    created_at: DateTime<Utc>,
}

impl From<DeviceRow> for Device {
    fn from(row: DeviceRow) -> Self {
        Self {
            id: DeviceId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            serial_number: row.serial_number,
            created_at: row.created_at,
        }
    }
}

/// Repository for clocking device database operations.
pub struct DeviceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DeviceRepository<'a> {
    /// Create a new device repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a new clocking device.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the serial number is taken.
    /// Returns `RepositoryError::ForeignKey` if the owner doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_device: &NewDevice) -> Result<DeviceId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.device (user_id, name, serial_number)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(new_device.user_id.as_i32())
        .bind(&new_device.name)
        .bind(&new_device.serial_number)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("serial number already registered".to_owned());
            }
            map_foreign_key(e, "user")
        })?;

        Ok(DeviceId::new(id))
    }

    /// List all clocking devices.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Device>, RepositoryError> {
        let rows: Vec<DeviceRow> = sqlx::query_as(
            r"
            SELECT id, user_id, name, serial_number, created_at
            FROM loftbook.device
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
