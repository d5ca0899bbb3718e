//! Renewal date arithmetic and urgency banding
//!
//! All time-sensitive math takes an explicit "now" instant so results are
//! reproducible; nothing in this module reads an ambient clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

const MS_PER_DAY: i64 = 86_400_000;

/// Signed whole days from `now` until `instant`, rounded up.
///
/// A renewal two hours away counts as 1 day; an instant exactly at `now`
/// is 0; past instants yield negative values. This is the ceiling of the
/// millisecond delta over 86_400_000.
pub fn days_until(instant: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = instant.signed_duration_since(now).num_milliseconds();
    // Ceiling division that stays correct for negative deltas
    (ms + MS_PER_DAY - 1).div_euclid(MS_PER_DAY)
}

/// Display-urgency classification of a days-until-renewal value.
///
/// The boundaries at 0, 3, and 7 days are a contract with the renderer
/// (they drive the red/yellow/green highlighting), not a tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyBand {
    /// Already due (days left <= 0)
    Due,
    /// Renews within 3 days
    Critical,
    /// Renews within 7 days
    Warning,
    /// More than a week out
    Normal,
}

impl UrgencyBand {
    /// Classify a days-left value. Bands are mutually exclusive and
    /// exhaustive over the integers.
    pub fn for_days_left(days_left: i64) -> Self {
        if days_left <= 0 {
            Self::Due
        } else if days_left <= 3 {
            Self::Critical
        } else if days_left <= 7 {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for UrgencyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a renewal instant from its string form.
///
/// Accepts RFC 3339 date-times, naive date-times (assumed UTC), and plain
/// `YYYY-MM-DD` dates (midnight UTC). Anything else is a
/// [`Error::MalformedDate`] - malformed dates fail loudly here instead of
/// leaking non-numeric values into the day arithmetic.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        // Midnight UTC; NaiveDate always has a valid midnight
        return Ok(date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc());
    }
    Err(Error::MalformedDate(s.to_string()))
}

/// Serde adapter so snapshot records can carry any of the accepted
/// renewal date forms.
pub fn deserialize_instant<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(s: &str) -> DateTime<Utc> {
        parse_instant(s).unwrap()
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        // Two hours away still counts as a day out
        assert_eq!(days_until(now + chrono::Duration::hours(2), now), 1);
        // Exactly now
        assert_eq!(days_until(now, now), 0);
        // 36 hours rounds up to 2 days
        assert_eq!(days_until(now + chrono::Duration::hours(36), now), 2);
        // Exactly one day
        assert_eq!(days_until(now + chrono::Duration::days(1), now), 1);
    }

    #[test]
    fn test_days_until_negative_for_past() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        // One millisecond ago still ceils to 0
        assert_eq!(days_until(now - chrono::Duration::milliseconds(1), now), 0);
        // Exactly one day ago
        assert_eq!(days_until(now - chrono::Duration::days(1), now), -1);
        // Five days ago
        assert_eq!(days_until(now - chrono::Duration::days(5), now), -5);
    }

    #[test]
    fn test_urgency_band_boundaries() {
        assert_eq!(UrgencyBand::for_days_left(-5), UrgencyBand::Due);
        assert_eq!(UrgencyBand::for_days_left(0), UrgencyBand::Due);
        assert_eq!(UrgencyBand::for_days_left(1), UrgencyBand::Critical);
        assert_eq!(UrgencyBand::for_days_left(3), UrgencyBand::Critical);
        assert_eq!(UrgencyBand::for_days_left(4), UrgencyBand::Warning);
        assert_eq!(UrgencyBand::for_days_left(7), UrgencyBand::Warning);
        assert_eq!(UrgencyBand::for_days_left(8), UrgencyBand::Normal);
        assert_eq!(UrgencyBand::for_days_left(365), UrgencyBand::Normal);
    }

    #[test]
    fn test_parse_instant_formats() {
        assert_eq!(
            instant("2026-09-15T10:30:00Z"),
            Utc.with_ymd_and_hms(2026, 9, 15, 10, 30, 0).unwrap()
        );
        assert_eq!(
            instant("2026-09-15T10:30:00+05:30"),
            Utc.with_ymd_and_hms(2026, 9, 15, 5, 0, 0).unwrap()
        );
        assert_eq!(
            instant("2026-09-15T10:30:00"),
            Utc.with_ymd_and_hms(2026, 9, 15, 10, 30, 0).unwrap()
        );
        assert_eq!(
            instant("2026-09-15"),
            Utc.with_ymd_and_hms(2026, 9, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(matches!(
            parse_instant("next tuesday"),
            Err(Error::MalformedDate(_))
        ));
        assert!(matches!(parse_instant(""), Err(Error::MalformedDate(_))));
        assert!(matches!(
            parse_instant("2026-13-40"),
            Err(Error::MalformedDate(_))
        ));
    }
}
