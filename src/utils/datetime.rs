use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Display;

/// RFC 3339 with milliseconds and a numeric offset, e.g. `2025-09-08T08:30:00.000-04:00`.
pub fn format_iso<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// UTC timestamp in the `Z` form used for API timestamps.
pub fn format_utc_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Long English rendering, e.g. `Monday, September 8, 2025 at 8:30:00 AM EDT`.
pub fn format_long<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%A, %B %-d, %Y at %-I:%M:%S %p %Z").to_string()
}

/// Calendar date (`YYYY-MM-DD`) of the instant in UTC.
pub fn calendar_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}
