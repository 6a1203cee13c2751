//! Last-snowfall date normalization and freshness

use chrono::{NaiveDate, TimeZone, Utc};

/// Display value used when no valid date is available
pub const SENTINEL_DATE: &str = "1970-01-01";

/// Sort value used when no valid date is available
pub const SENTINEL_EPOCH: i64 = 0;

/// A snowfall at most this many whole days old counts as fresh
pub const FRESH_WINDOW_DAYS: i64 = 3;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Dash placeholders the site shows in place of a missing value
pub(crate) const PLACEHOLDERS: &[&str] = &["-", "–", "—"];

/// Parses a day/month/year date such as `05.01.2024`, `5/1/24` or `05-01-2024`
///
/// Two-digit years are taken as 20xx. Returns `None` for empty input, dash
/// placeholders, and anything that is not a real calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() || PLACEHOLDERS.contains(&trimmed) {
        return None;
    }

    let unified: String = trimmed
        .chars()
        .map(|c| if c == '/' || c == '-' { '.' } else { c })
        .collect();
    let parts: Vec<&str> = unified.split('.').map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let mut year_value: i32 = year.parse().ok()?;
    if year.len() <= 2 {
        year_value += 2000;
    }

    NaiveDate::from_ymd_opt(year_value, month, day)
}

/// Seconds since the Unix epoch at midnight UTC of `date`
pub fn date_to_epoch(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| Utc.from_utc_datetime(&midnight).timestamp())
        .unwrap_or(SENTINEL_EPOCH)
}

/// Normalizes a scraped date into `(YYYY-MM-DD, epoch)`
///
/// Missing, placeholder or malformed input yields the sentinel
/// `("1970-01-01", 0)` so every row stays sortable.
///
/// # Examples
///
/// ```
/// use snowcard_report::normalize::normalize_date;
///
/// assert_eq!(normalize_date("05.01.2024").0, "2024-01-05");
/// assert_eq!(normalize_date("–"), ("1970-01-01".to_string(), 0));
/// ```
pub fn normalize_date(text: &str) -> (String, i64) {
    match parse_date(text) {
        Some(date) => (date.format("%Y-%m-%d").to_string(), date_to_epoch(date)),
        None => (SENTINEL_DATE.to_string(), SENTINEL_EPOCH),
    }
}

/// Returns whether a snowfall at `epoch` is fresh relative to `now_epoch`
///
/// Age is counted in whole elapsed days, so a snowfall dated three days ago
/// stays fresh for that entire day. The sentinel epoch is never fresh.
pub fn is_fresh(epoch: i64, now_epoch: i64) -> bool {
    epoch != SENTINEL_EPOCH && (now_epoch - epoch).div_euclid(SECS_PER_DAY) <= FRESH_WINDOW_DAYS
}
