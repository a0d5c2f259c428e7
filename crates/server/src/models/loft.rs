//! Loft domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{LoftId, UserId};

/// A loft location.
///
/// Lofts created through registration carry the raw DMS notation alongside
/// the decimal degrees; lofts created through `POST /api/lofts` are
/// decimal-only and have `null` DMS fields.
#[derive(Debug, Clone, Serialize)]
pub struct Loft {
    #[serde(rename = "loft_id")]
    pub id: LoftId,
    pub user_id: UserId,
    pub name: Option<String>,
    pub latitude_dms: Option<String>,
    pub longitude_dms: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/lofts`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLoft {
    pub user_id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}
