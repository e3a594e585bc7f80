//! Date and timestamp helpers
//!
//! Deadlines are calendar dates; creation times are local timestamps.
//! Parsing is lenient so that files written by older versions of the
//! application (date-only creation stamps, `DD-MM-YYYY` deadlines) still load.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Canonical deadline format (ISO-8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Deadline format used by the old desktop front-end
pub const LEGACY_DATE_FORMAT: &str = "%d-%m-%Y";

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a deadline string
///
/// Accepts `YYYY-MM-DD` and `DD-MM-YYYY`. A blank string means "no deadline".
///
/// # Returns
/// `Ok(None)` for a blank string, `Ok(Some(date))` on success, or an error
/// message naming the accepted formats.
pub fn parse_deadline(input: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, LEGACY_DATE_FORMAT))
        .map(Some)
        .map_err(|_| {
            format!(
                "Invalid date '{}'. Use YYYY-MM-DD (e.g., '2026-12-25') or DD-MM-YYYY",
                trimmed
            )
        })
}

/// Parse a creation timestamp
///
/// Accepts ISO-8601 local timestamps (with `T` or space separator, optional
/// fractional seconds), RFC 3339 timestamps with an offset, and bare dates
/// (interpreted as midnight).
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(ts);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.naive_local());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
