//! Crawl statistics
//!
//! Counters accumulated by the crawl driver and the report step, printed as
//! a short summary at the end of a run.

use crate::normalize::{date_to_epoch, is_fresh, parse_date};
use crate::resort::ResortRecord;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of index letters walked
    pub letters_scanned: u64,

    /// Number of listing pages fetched, including terminating pages
    pub listing_pages: u64,

    /// Number of resort entries collected from listing pages
    pub resorts_found: u64,

    /// Number of detail pages that failed to load
    pub detail_failures: u64,

    /// Number of rows flagged as fresh snow in the report
    pub fresh_resorts: u64,
}

impl CrawlStatistics {
    /// Percentage of detail pages that loaded successfully
    pub fn detail_success_rate(&self) -> f64 {
        if self.resorts_found == 0 {
            return 0.0;
        }
        let loaded = self.resorts_found.saturating_sub(self.detail_failures);
        (loaded as f64 / self.resorts_found as f64) * 100.0
    }
}

/// Counts records whose last snowfall is fresh relative to `now_epoch`
pub fn count_fresh(records: &[ResortRecord], now_epoch: i64) -> u64 {
    records
        .iter()
        .filter_map(|record| parse_date(&record.last_snowfall))
        .filter(|date| is_fresh(date_to_epoch(*date), now_epoch))
        .count() as u64
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
/// * `report_path` - Where the report was written
pub fn print_statistics(stats: &CrawlStatistics, report_path: &str) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Letters scanned: {}", stats.letters_scanned);
    println!("  Listing pages fetched: {}", stats.listing_pages);
    println!("  Resorts found: {}", stats.resorts_found);
    println!("  Detail pages failed: {}", stats.detail_failures);
    println!("  Fresh snow (last 3 days): {}", stats.fresh_resorts);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} detail pages loaded)",
        stats.detail_success_rate(),
        stats.resorts_found.saturating_sub(stats.detail_failures),
        stats.resorts_found
    );
    println!("\nHTML report saved to: {}", report_path);
}
