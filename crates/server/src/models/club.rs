//! Club domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::ClubId;

/// A racing club.
#[derive(Debug, Clone, Serialize)]
pub struct Club {
    #[serde(rename = "club_id")]
    pub id: ClubId,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/clubs`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewClub {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}
