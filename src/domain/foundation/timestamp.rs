//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp at UTC midnight of the given calendar date.
    ///
    /// Returns `None` for invalid dates (e.g. February 30).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let dt = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()?;
        Some(Self(dt))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Strips the time-of-day, keeping only the UTC calendar date at 00:00:00.000.
    ///
    /// Idempotent: normalizing an already-midnight instant is a no-op.
    pub fn to_utc_midnight(&self) -> Self {
        // and_hms_opt(0, 0, 0) cannot fail for a valid date
        Self(self.0.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc())
    }

    /// Checks whether this instant sits exactly at UTC midnight.
    pub fn is_utc_midnight(&self) -> bool {
        self.0.num_seconds_from_midnight() == 0 && self.0.nanosecond() == 0
    }

    /// Formats as an RFC 3339 string (the wire format for all dates).
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_ymd_creates_midnight() {
        let ts = Timestamp::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 31);
        assert!(ts.is_utc_midnight());
    }

    #[test]
    fn timestamp_from_ymd_rejects_invalid_date() {
        assert!(Timestamp::from_ymd(2023, 2, 30).is_none());
    }

    #[test]
    fn to_utc_midnight_strips_time_of_day() {
        let dt = DateTime::parse_from_rfc3339("2024-03-15T17:45:12.345Z")
            .unwrap()
            .with_timezone(&Utc);
        let normalized = Timestamp::from_datetime(dt).to_utc_midnight();

        assert!(normalized.is_utc_midnight());
        assert_eq!(normalized.as_datetime().day(), 15);
    }

    #[test]
    fn to_utc_midnight_is_idempotent() {
        let ts = Timestamp::from_ymd(2024, 6, 1).unwrap();
        assert_eq!(ts.to_utc_midnight(), ts);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_ymd(2024, 1, 1).unwrap();
        let ts2 = Timestamp::from_ymd(2024, 1, 2).unwrap();

        assert!(ts1 < ts2);
        assert!(ts1.is_before(&ts2));
        assert!(ts2.is_after(&ts1));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = Timestamp::from_ymd(2024, 1, 15).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }

    #[test]
    fn plus_days_and_minus_days_roundtrip() {
        let ts = Timestamp::from_ymd(2024, 5, 10).unwrap();
        assert_eq!(ts.plus_days(7).minus_days(7), ts);
    }
}
