//! Normalizer for scraped display values
//!
//! Converts raw snow, temperature and date strings into sortable values.
//! Two policies exist for values that are missing or unparseable:
//!
//! - `Fallback` (default): numbers become `0.0` and dates become the
//!   sentinel `1970-01-01`, so every cell sorts numerically
//! - `Strict`: the sort key is left empty and the scraped text is shown

mod date;
mod number;

pub use date::{
    date_to_epoch, is_fresh, normalize_date, parse_date, FRESH_WINDOW_DAYS, SENTINEL_DATE,
    SENTINEL_EPOCH,
};
pub use number::{normalize_number, parse_number};

use serde::Deserialize;

/// Policy for rendering missing or unparseable values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// Substitute defaults so every row sorts uniformly
    #[default]
    Fallback,

    /// Leave sort keys empty and keep the scraped text
    Strict,
}

/// Display unit of a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Centimetres,
    Celsius,
}

impl Unit {
    /// Display text substituted for a missing value
    fn zero_display(self) -> &'static str {
        match self {
            Unit::Centimetres => "0 cm",
            Unit::Celsius => "0 °C",
        }
    }
}

/// A table cell with a machine sort key and human display text
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Value for the `data-sort` attribute; empty means "sort by text"
    pub sort: String,

    /// Visible cell text
    pub display: String,
}

/// A last-snowfall cell plus its freshness flag
#[derive(Debug, Clone, PartialEq)]
pub struct DateCell {
    pub cell: Cell,
    pub fresh: bool,
}

fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || date::PLACEHOLDERS.contains(&trimmed)
}

/// Builds the cell for a snow depth or temperature value
pub fn number_cell(raw: &str, unit: Unit, policy: MissingValuePolicy) -> Cell {
    match policy {
        MissingValuePolicy::Fallback => {
            let display = if is_missing(raw) {
                unit.zero_display().to_string()
            } else {
                raw.trim().to_string()
            };
            Cell {
                sort: normalize_number(raw).to_string(),
                display,
            }
        }
        MissingValuePolicy::Strict => Cell {
            sort: parse_number(raw).map(|n| n.to_string()).unwrap_or_default(),
            display: raw.trim().to_string(),
        },
    }
}

/// Builds the cell for a last-snowfall date
///
/// Dates sort by epoch and display as ISO `YYYY-MM-DD`.
pub fn date_cell(raw: &str, policy: MissingValuePolicy, now_epoch: i64) -> DateCell {
    let parsed = parse_date(raw);
    let fresh = parsed
        .map(|date| is_fresh(date_to_epoch(date), now_epoch))
        .unwrap_or(false);

    let cell = match (policy, parsed) {
        (_, Some(date)) => Cell {
            sort: date_to_epoch(date).to_string(),
            display: date.format("%Y-%m-%d").to_string(),
        },
        (MissingValuePolicy::Fallback, None) => Cell {
            sort: SENTINEL_EPOCH.to_string(),
            display: SENTINEL_DATE.to_string(),
        },
        (MissingValuePolicy::Strict, None) => Cell {
            sort: String::new(),
            display: raw.trim().to_string(),
        },
    };

    DateCell { cell, fresh }
}
