//! Calendar date helpers for the fixed `YYYYMMDD` representation.
//!
//! Tasks carry their due date as an eight digit string both in storage and
//! on the wire. Lexicographic order of that string equals chronological
//! order, which the store relies on for `date >= ?` range queries.
//!
//! ## Usage
//!
//! ```rust
//! use scheduler::libs::date::{format_date, parse_date};
//!
//! let date = parse_date("20240229").unwrap();
//! assert_eq!(format_date(date), "20240229");
//! assert!(parse_date("20230229").is_err());
//! ```

use super::error::{TaskError, TaskResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// `chrono` format string equivalent of the fixed date layout.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Length of a formatted date.
pub const DATE_LEN: usize = 8;

/// Largest year that still formats into eight digits.
pub const MAX_YEAR: i32 = 9999;

/// Parses a strict `YYYYMMDD` string into a calendar date.
///
/// Anything other than exactly eight ASCII digits is rejected before the
/// calendar check, so signs, separators and short years never slip through.
pub fn parse_date(s: &str) -> TaskResult<NaiveDate> {
    if s.len() != DATE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TaskError::InvalidFormat(s.to_string()));
    }

    let year: i32 = s[0..4].parse().map_err(|_| TaskError::InvalidFormat(s.to_string()))?;
    let month: u32 = s[4..6].parse().map_err(|_| TaskError::InvalidFormat(s.to_string()))?;
    let day: u32 = s[6..8].parse().map_err(|_| TaskError::InvalidFormat(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| TaskError::InvalidFormat(s.to_string()))
}

/// Formats a date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// True if `date` can be written back in the fixed layout.
pub fn is_representable(date: NaiveDate) -> bool {
    (0..=MAX_YEAR).contains(&date.year())
}

/// Calendar-day comparison: both instants are truncated to their UTC day.
pub fn before<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.with_timezone(&Utc).date_naive() < b.with_timezone(&Utc).date_naive()
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
