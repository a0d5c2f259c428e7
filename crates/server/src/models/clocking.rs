//! Clocking domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{ClockingId, DeviceId, PigeonId, RaceId, UserId};

/// An arrival clocking for one pigeon in one race.
#[derive(Debug, Clone, Serialize)]
pub struct Clocking {
    #[serde(rename = "clocking_id")]
    pub id: ClockingId,
    pub pigeon_id: PigeonId,
    pub race_id: RaceId,
    pub user_id: UserId,
    /// Manual clockings have no device.
    pub device_id: Option<DeviceId>,
    pub arrival_time: DateTime<Utc>,
    pub speed_kph: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/clockings`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewClocking {
    pub pigeon_id: PigeonId,
    pub race_id: RaceId,
    pub user_id: UserId,
    #[serde(default)]
    pub device_id: Option<DeviceId>,
    /// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
    #[serde(deserialize_with = "crate::models::datetime::deserialize")]
    pub arrival_time: DateTime<Utc>,
    #[serde(default)]
    pub speed_kph: Option<f64>,
}
