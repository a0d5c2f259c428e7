//! Pigeon domain types and wire records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use loftbook_core::{PigeonId, UserId};

/// A registered pigeon.
#[derive(Debug, Clone, Serialize)]
pub struct Pigeon {
    #[serde(rename = "pigeon_id")]
    pub id: PigeonId,
    pub user_id: UserId,
    pub ring_number: String,
    pub name: String,
    pub color: String,
    pub sex: String,
    pub breed: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/pigeons`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPigeon {
    pub user_id: UserId,
    pub ring_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub breed: String,
    /// Format: `YYYY-MM-DD`.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pigeon_parses_birth_date() {
        let pigeon: NewPigeon = serde_json::from_str(
            r#"{"user_id": 1, "ring_number": "PH-2024-0857", "birth_date": "2024-02-11"}"#,
        )
        .unwrap();
        assert_eq!(
            pigeon.birth_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 11).unwrap())
        );
        assert_eq!(pigeon.sex, "");
    }

    #[test]
    fn test_new_pigeon_rejects_bad_birth_date() {
        let result: Result<NewPigeon, _> = serde_json::from_str(
            r#"{"user_id": 1, "ring_number": "PH-2024-0857", "birth_date": "11/02/2024"}"#,
        );
        assert!(result.is_err());
    }
}
