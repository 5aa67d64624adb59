//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Calendar-day operations (`start_of_day`, `end_of_day`, `date`) are
/// evaluated in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    ///
    /// Domain code reads time through the `Clock` port; this is only the
    /// source the system clock adapter wraps.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Midnight (00:00:00 UTC) at the start of the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Calendar date of this instant.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
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
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Adds calendar months, clamping to the last day of shorter months
    /// (Jan 31 + 1 month = Feb 28/29).
    ///
    /// Returns `None` when the result is outside the representable range.
    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// 00:00:00.000 on this timestamp's calendar day.
    pub fn start_of_day(&self) -> Self {
        Self::from_date(self.date())
    }

    /// 23:59:59.999 on this timestamp's calendar day.
    pub fn end_of_day(&self) -> Self {
        let end = self.start_of_day().0 + Duration::days(1) - Duration::milliseconds(1);
        Self(end)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap())
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = at(2024, 1, 10, 8, 0, 0);
        let ts2 = ts1.plus_secs(1);

        assert!(ts1 < ts2);
        assert!(ts1.is_before(&ts2));
        assert!(ts2.is_after(&ts1));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = at(2024, 1, 15, 10, 30, 0);
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }

    #[test]
    fn start_of_day_truncates_time() {
        let ts = at(2024, 1, 10, 17, 45, 12).start_of_day();
        assert_eq!(ts, at(2024, 1, 10, 0, 0, 0));
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let ts = at(2024, 1, 10, 3, 0, 0).end_of_day();
        let dt = ts.as_datetime();
        assert_eq!(dt.day(), 10);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
        assert_eq!(dt.second(), 59);
        assert_eq!(dt.timestamp_subsec_millis(), 999);
    }

    #[test]
    fn add_months_uses_calendar_months() {
        let ts = at(2024, 1, 10, 12, 0, 0).add_months(1).unwrap();
        assert_eq!(ts, at(2024, 2, 10, 12, 0, 0));
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        let ts = at(2024, 1, 31, 12, 0, 0).add_months(1).unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn minus_days_moves_backwards() {
        let ts = at(2024, 1, 10, 12, 0, 0).minus_days(7);
        assert_eq!(ts, at(2024, 1, 3, 12, 0, 0));
    }
}
