//! Date and time text for a record's timestamp

use chrono::{DateTime, Local, Utc};

use crate::core::locale::TimeZonePolicy;

/// "Mar 3, 1984"
const DATE_PATTERN: &str = "%b %-d, %Y";

/// "4:30 PM"
const TIME_PATTERN: &str = "%-I:%M %p";

/// Turn epoch milliseconds into an instant.
///
/// Values past the calendar range are clamped to its nearest end. At those
/// ends the year no longer fits four digits and is printed with a sign, and
/// a zone offset can push the local date one day past the range, e.g.
/// "Jan 1, +262143" for `i64::MAX` at +05:00.
pub fn instant_from_millis(time_ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(time_ms).unwrap_or(if time_ms < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

fn format_in_zone(instant: DateTime<Utc>, zone: TimeZonePolicy, pattern: &str) -> String {
    match zone {
        TimeZonePolicy::Utc => instant.format(pattern).to_string(),
        TimeZonePolicy::Fixed(offset) => instant.with_timezone(&offset).format(pattern).to_string(),
        TimeZonePolicy::Local => instant.with_timezone(&Local).format(pattern).to_string(),
    }
}

/// Format the date part, e.g. "Mar 3, 1984".
pub fn format_date(time_ms: i64, zone: TimeZonePolicy) -> String {
    format_in_zone(instant_from_millis(time_ms), zone, DATE_PATTERN)
}

/// Format the time part on a 12-hour clock, e.g. "4:30 PM".
pub fn format_time(time_ms: i64, zone: TimeZonePolicy) -> String {
    format_in_zone(instant_from_millis(time_ms), zone, TIME_PATTERN)
}

/// Format `(date, time)` from the same instant.
pub fn format_date_time(time_ms: i64, zone: TimeZonePolicy) -> (String, String) {
    let instant = instant_from_millis(time_ms);
    (
        format_in_zone(instant, zone, DATE_PATTERN),
        format_in_zone(instant, zone, TIME_PATTERN),
    )
}
