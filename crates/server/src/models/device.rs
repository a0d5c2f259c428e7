//! Clocking device domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{DeviceId, UserId};

/// An electronic clocking device owned by a member.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    #[serde(rename = "device_id")]
    pub id: DeviceId,
    pub user_id: UserId,
    pub name: String,
    pub serial_number: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/devices`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDevice {
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub serial_number: String,
}
