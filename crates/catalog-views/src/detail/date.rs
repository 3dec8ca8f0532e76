//! Review date display.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// `M/D/YYYY` in the host's local timezone.
pub fn format_review_date(date: &DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

/// `M/D/YYYY` in `tz`. No zero padding.
pub fn format_date_in<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}
