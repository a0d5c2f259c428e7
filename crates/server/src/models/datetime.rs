//! Timestamp parsing for request records.
//!
//! Clients send timestamps either as RFC 3339 or in the legacy
//! `YYYY-MM-DD HH:MM:SS` form (interpreted as UTC). Both are accepted on
//! every timestamp field; responses always use RFC 3339.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp in either accepted form.
///
/// # Errors
///
/// Returns an error naming both accepted forms when neither matches.
pub fn parse_flexible(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, LEGACY_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| format!("expected RFC 3339 or `{LEGACY_FORMAT}` timestamp, got `{s}`"))
}

/// Deserialize a required timestamp field in either accepted form.
///
/// Use with `#[serde(deserialize_with = "crate::models::datetime::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_flexible(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_legacy_form() {
        let dt = parse_flexible("2025-05-17 06:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-05-17T06:30:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_flexible("2025-05-17T06:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_flexible("next tuesday").is_err());
        assert!(parse_flexible("2025-05-17").is_err());
        assert!(parse_flexible("").is_err());
    }
}
