//! Display formatting for dates and durations
//!
//! Pure functions, data in and string out.

use chrono::{DateTime, Utc};

/// Format a release date as `DD Mon YYYY`, e.g. `15 Mar 2021`.
pub fn format_release_date(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format a runtime in minutes as `Xh MMm`, or `Mm` when under an hour.
///
/// ```
/// assert_eq!(cinemaddict_core::format_runtime(125), "2h 05m");
/// assert_eq!(cinemaddict_core::format_runtime(45), "45m");
/// ```
pub fn format_runtime(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    if hours == 0 {
        format!("{}m", rest)
    } else {
        format!("{}h {:02}m", hours, rest)
    }
}

/// Format a comment timestamp as `YYYY/MM/DD HH:MM`.
pub fn format_comment_date(date: &DateTime<Utc>) -> String {
    date.format("%Y/%m/%d %H:%M").to_string()
}
