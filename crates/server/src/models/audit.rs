//! Audit log domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{AuditLogId, UserId};

/// A recorded administrative action.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLog {
    #[serde(rename = "log_id")]
    pub id: AuditLogId,
    /// `null` when the acting user has since been deleted.
    pub user_id: Option<UserId>,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/audit-logs`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAuditLog {
    pub user_id: UserId,
    pub action: String,
}
