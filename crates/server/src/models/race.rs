//! Race, entry and result domain types and wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{PigeonId, RaceId, RaceResultId};

/// A race.
#[derive(Debug, Clone, Serialize)]
pub struct Race {
    #[serde(rename = "race_id")]
    pub id: RaceId,
    pub name: String,
    pub release_point: String,
    pub distance_km: f64,
    pub release_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/races`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRace {
    pub name: String,
    #[serde(default)]
    pub release_point: String,
    #[serde(default)]
    pub distance_km: f64,
    /// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
    #[serde(deserialize_with = "crate::models::datetime::deserialize")]
    pub release_time: DateTime<Utc>,
}

/// Request body for `POST /api/race-participants`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NewRaceEntry {
    pub race_id: RaceId,
    pub pigeon_id: PigeonId,
}

/// A final ranked result for one pigeon in one race.
#[derive(Debug, Clone, Serialize)]
pub struct RaceResult {
    #[serde(rename = "result_id")]
    pub id: RaceResultId,
    pub race_id: RaceId,
    pub pigeon_id: PigeonId,
    pub speed_kph: f64,
    pub arrival_time: DateTime<Utc>,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/race-results`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRaceResult {
    pub race_id: RaceId,
    pub pigeon_id: PigeonId,
    #[serde(default)]
    pub speed_kph: f64,
    /// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
    #[serde(deserialize_with = "crate::models::datetime::deserialize")]
    pub arrival_time: DateTime<Utc>,
    pub rank: i32,
}

/// Query parameters accepted by the clocking and result listings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RaceFilter {
    pub race_id: Option<RaceId>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_race_accepts_legacy_timestamp() {
        let race: NewRace = serde_json::from_str(
            r#"{"name": "Ilocos 400", "release_point": "Laoag", "distance_km": 402.5,
                "release_time": "2025-05-17 06:30:00"}"#,
        )
        .unwrap();
        assert_eq!(race.release_time.to_rfc3339(), "2025-05-17T06:30:00+00:00");
    }

    #[test]
    fn test_new_race_rejects_bad_timestamp() {
        let result: Result<NewRace, _> = serde_json::from_str(
            r#"{"name": "Ilocos 400", "release_time": "soon"}"#,
        );
        assert!(result.is_err());
    }
}
