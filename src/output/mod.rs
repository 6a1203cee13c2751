//! Output module for generating the resort report
//!
//! This module handles:
//! - Rendering the sortable, filterable HTML report
//! - Recording crawl statistics

mod html;
pub mod stats;

pub use html::{render_report, write_report, COLUMNS, FRESH_ROW_CLASS};
pub use stats::{count_fresh, print_statistics, CrawlStatistics};
