//! Audit log repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use loftbook_core::{AuditLogId, UserId};

use super::{RepositoryError, map_foreign_key};
use crate::models::audit::{AuditLog, NewAuditLog};

/// Internal row type for `PostgreSQL` audit log queries.
#[derive(Debug, sqlx::FromRow)]
struct AuditLogRow {
    id: i32,
    user_id: Option<i32>,
    action: String,
    created_at: DateTime<Utc>,
}

impl From<AuditLogRow> for AuditLog {
    fn from(row: AuditLogRow) -> Self {
        Self {
            id: AuditLogId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            action: row.action,
            created_at: row.created_at,
        }
    }
}

/// Repository for audit log database operations.
pub struct AuditLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AuditLogRepository<'a> {
    /// Create a new audit log repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record an action performed by a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, entry: &NewAuditLog) -> Result<AuditLogId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO loftbook.audit_log (user_id, action)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(entry.user_id.as_i32())
        .bind(&entry.action)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_foreign_key(e, "user"))?;

        Ok(AuditLogId::new(id))
    }

    /// List all audit log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<AuditLog>, RepositoryError> {
        let rows: Vec<AuditLogRow> = sqlx::query_as(
            r"
            SELECT id, user_id, action, created_at
            FROM loftbook.audit_log
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
