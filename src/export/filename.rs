//! Suggested download filenames.

use chrono::{Local, NaiveDateTime};

/// Formats a suggested filename from a prefix, extension, and timestamp.
///
/// The shape is `{prefix}_{YYYY-MM-DD}_{HHMM}.{ext}`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use wage_report_engine::export::timestamp_name;
///
/// let at = NaiveDate::from_ymd_opt(2025, 1, 6)
///     .unwrap()
///     .and_hms_opt(14, 5, 0)
///     .unwrap();
/// assert_eq!(timestamp_name("upah", "xlsx", at), "upah_2025-01-06_1405.xlsx");
/// ```
pub fn timestamp_name(prefix: &str, ext: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.{}", prefix, at.format("%Y-%m-%d_%H%M"), ext)
}

/// Formats a suggested filename stamped with the current local time.
pub fn suggested_name(prefix: &str, ext: &str) -> String {
    timestamp_name(prefix, ext, Local::now().naive_local())
}
