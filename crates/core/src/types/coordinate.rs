//! Degrees-minutes-seconds coordinate type.

use core::fmt;

/// Errors that can occur when parsing a [`DmsCoordinate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DmsCoordinateError {
    /// The input string is empty or whitespace only.
    #[error("coordinate cannot be empty")]
    Empty,
    /// The input does not split into a value token and a hemisphere token.
    #[error("coordinate must be a D:M:S value followed by a hemisphere letter")]
    TokenCount,
    /// The value token does not have exactly three colon-separated segments.
    #[error("coordinate value must be degrees:minutes:seconds")]
    SegmentCount,
    /// A degrees, minutes or seconds segment is not a number.
    #[error("{segment} is not a number")]
    NotANumber {
        /// Which segment failed to parse.
        segment: &'static str,
    },
    /// The hemisphere token is not one of `N`, `S`, `E`, `W`.
    #[error("hemisphere must be N, S, E or W")]
    Hemisphere,
}

/// A coordinate in degrees-minutes-seconds notation.
///
/// Loft positions are reported by members as a sexagesimal value plus a
/// hemisphere letter, e.g. `14:09:12.42 N`. Parsing keeps the raw notation
/// (it is stored and displayed verbatim) and derives the signed decimal value
/// used for distance calculations.
///
/// ## Constraints
///
/// - Exactly two whitespace-separated tokens: the `D:M:S` value and the
///   hemisphere letter
/// - The value token has exactly three colon-separated segments, each a
///   decimal number (seconds may carry a fraction)
/// - The hemisphere letter is one of `N`, `S`, `E`, `W` (case-sensitive);
///   `S` and `W` negate the decimal value
///
/// The parser does not range-check the result; `100:00:00 N` is accepted.
///
/// ## Examples
///
/// ```
/// use loftbook_core::DmsCoordinate;
///
/// let lat = DmsCoordinate::parse("14:09:12.42 N").unwrap();
/// assert!((lat.decimal_degrees() - 14.15345).abs() < 1e-6);
/// assert_eq!(lat.as_str(), "14:09:12.42 N");
///
/// assert!(DmsCoordinate::parse("14:09 N").is_err());     // missing seconds
/// assert!(DmsCoordinate::parse("ab:00:00 N").is_err());  // non-numeric
/// assert!(DmsCoordinate::parse("14:09:12.42").is_err()); // no hemisphere
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DmsCoordinate {
    raw: String,
    decimal: f64,
}

impl DmsCoordinate {
    /// Parse a `DmsCoordinate` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty or whitespace only
    /// - Does not consist of a value token and a hemisphere token
    /// - Has a value token without exactly three `:`-separated segments
    /// - Has a segment that is not a decimal number
    /// - Has a hemisphere token other than `N`, `S`, `E`, `W`
    pub fn parse(s: &str) -> Result<Self, DmsCoordinateError> {
        if s.trim().is_empty() {
            return Err(DmsCoordinateError::Empty);
        }

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [value, hemisphere] = tokens.as_slice() else {
            return Err(DmsCoordinateError::TokenCount);
        };

        let segments: Vec<&str> = value.split(':').collect();
        let [degrees, minutes, seconds] = segments.as_slice() else {
            return Err(DmsCoordinateError::SegmentCount);
        };

        let degrees: f64 = degrees
            .parse()
            .map_err(|_| DmsCoordinateError::NotANumber { segment: "degrees" })?;
        let minutes: f64 = minutes
            .parse()
            .map_err(|_| DmsCoordinateError::NotANumber { segment: "minutes" })?;
        let seconds: f64 = seconds
            .parse()
            .map_err(|_| DmsCoordinateError::NotANumber { segment: "seconds" })?;

        let sign = match *hemisphere {
            "N" | "E" => 1.0,
            "S" | "W" => -1.0,
            _ => return Err(DmsCoordinateError::Hemisphere),
        };

        let decimal = sign * (degrees + minutes / 60.0 + seconds / 3600.0);

        Ok(Self {
            raw: s.to_owned(),
            decimal,
        })
    }

    /// Returns the signed decimal-degrees value.
    ///
    /// North and east are positive, south and west negative.
    #[must_use]
    pub const fn decimal_degrees(&self) -> f64 {
        self.decimal
    }

    /// Returns the raw DMS notation as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the coordinate and returns the raw notation.
    #[must_use]
    pub fn into_raw(self) -> String {
        self.raw
    }
}

impl fmt::Display for DmsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for DmsCoordinate {
    type Err = DmsCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DmsCoordinate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_parse_north_latitude() {
        let coord = DmsCoordinate::parse("14:09:12.42 N").unwrap();
        assert!((coord.decimal_degrees() - 14.153_45).abs() < EPSILON);
    }

    #[test]
    fn test_parse_west_longitude() {
        let coord = DmsCoordinate::parse("121:15:58.30 W").unwrap();
        assert!((coord.decimal_degrees() + 121.266_194_4).abs() < EPSILON);
    }

    #[test]
    fn test_parse_south_is_negative() {
        let coord = DmsCoordinate::parse("33:52:04 S").unwrap();
        assert!(coord.decimal_degrees() < 0.0);
        assert!((coord.decimal_degrees() + 33.867_778).abs() < EPSILON);
    }

    #[test]
    fn test_parse_east_is_positive() {
        let coord = DmsCoordinate::parse("151:12:26 E").unwrap();
        assert!((coord.decimal_degrees() - 151.207_222).abs() < EPSILON);
    }

    #[test]
    fn test_parse_integer_seconds() {
        let coord = DmsCoordinate::parse("10:30:00 N").unwrap();
        assert!((coord.decimal_degrees() - 10.5).abs() < EPSILON);
    }

    #[test]
    fn test_parse_extra_whitespace_between_tokens() {
        let coord = DmsCoordinate::parse("14:09:12.42   N").unwrap();
        assert!((coord.decimal_degrees() - 14.153_45).abs() < EPSILON);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            DmsCoordinate::parse(""),
            Err(DmsCoordinateError::Empty)
        ));
        assert!(matches!(
            DmsCoordinate::parse("   "),
            Err(DmsCoordinateError::Empty)
        ));
    }

    #[test]
    fn test_parse_single_token() {
        assert!(matches!(
            DmsCoordinate::parse("14:09:12.42"),
            Err(DmsCoordinateError::TokenCount)
        ));
    }

    #[test]
    fn test_parse_three_tokens() {
        assert!(matches!(
            DmsCoordinate::parse("14:09:12.42 N extra"),
            Err(DmsCoordinateError::TokenCount)
        ));
    }

    #[test]
    fn test_parse_missing_seconds() {
        assert!(matches!(
            DmsCoordinate::parse("14:09 N"),
            Err(DmsCoordinateError::SegmentCount)
        ));
    }

    #[test]
    fn test_parse_too_many_segments() {
        assert!(matches!(
            DmsCoordinate::parse("14:09:12:05 N"),
            Err(DmsCoordinateError::SegmentCount)
        ));
    }

    #[test]
    fn test_parse_non_numeric_degrees() {
        assert!(matches!(
            DmsCoordinate::parse("ab:00:00 N"),
            Err(DmsCoordinateError::NotANumber {
                segment: "degrees"
            })
        ));
    }

    #[test]
    fn test_parse_non_numeric_minutes() {
        assert!(matches!(
            DmsCoordinate::parse("10:xx:00 N"),
            Err(DmsCoordinateError::NotANumber {
                segment: "minutes"
            })
        ));
    }

    #[test]
    fn test_parse_non_numeric_seconds() {
        assert!(matches!(
            DmsCoordinate::parse("10:00:zz N"),
            Err(DmsCoordinateError::NotANumber {
                segment: "seconds"
            })
        ));
    }

    #[test]
    fn test_parse_invalid_hemisphere() {
        assert!(matches!(
            DmsCoordinate::parse("14:09:12.42 Q"),
            Err(DmsCoordinateError::Hemisphere)
        ));
    }

    #[test]
    fn test_parse_lowercase_hemisphere_rejected() {
        assert!(matches!(
            DmsCoordinate::parse("14:09:12.42 n"),
            Err(DmsCoordinateError::Hemisphere)
        ));
    }

    #[test]
    fn test_hemisphere_not_checked_against_axis() {
        // Both axes share one parser; a latitude letter on a longitude
        // value is accepted.
        assert!(DmsCoordinate::parse("121:15:58.30 N").is_ok());
    }

    #[test]
    fn test_raw_notation_retained() {
        let coord = DmsCoordinate::parse("14:09:12.42 N").unwrap();
        assert_eq!(coord.as_str(), "14:09:12.42 N");
        assert_eq!(format!("{coord}"), "14:09:12.42 N");
    }

    #[test]
    fn test_no_range_check() {
        let coord = DmsCoordinate::parse("100:00:00 N").unwrap();
        assert!((coord.decimal_degrees() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_from_str() {
        let coord: DmsCoordinate = "14:09:12.42 N".parse().unwrap();
        assert_eq!(coord.as_str(), "14:09:12.42 N");
    }
}
