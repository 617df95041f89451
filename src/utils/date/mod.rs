// Date utility functions
// Calendar-date helpers shared by the day filter, geometry and grid

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::error::{LayoutError, LayoutResult};

/// Calendar date of an instant as seen in `tz`.
pub fn local_date<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

pub fn is_same_day<Tz: TimeZone>(instant: DateTime<Utc>, day: NaiveDate, tz: &Tz) -> bool {
    local_date(instant, tz) == day
}

/// Minutes elapsed since local midnight, including fractional seconds.
pub fn minutes_since_midnight<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> f64 {
    time_to_minutes(instant.with_timezone(tz).time())
}

pub fn time_to_minutes(time: NaiveTime) -> f64 {
    time.hour() as f64 * 60.0 + time.minute() as f64 + time.second() as f64 / 60.0
}

/// Whole and fractional minutes in a duration, clamped at zero.
pub fn duration_minutes(duration: Duration) -> f64 {
    let seconds = duration.num_milliseconds() as f64 / 1000.0;
    (seconds / 60.0).max(0.0)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_day(s: &str) -> LayoutResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LayoutError::InvalidDate(s.to_string()))
}

/// Consecutive days starting at `first`.
pub fn day_span(first: NaiveDate, count: u32) -> Vec<NaiveDate> {
    first.iter_days().take(count as usize).collect()
}
