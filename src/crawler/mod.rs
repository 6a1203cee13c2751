//! Crawler module for the resort directory
//!
//! This module contains the crawl pipeline, including:
//! - HTTP fetching with forced UTF-8 decoding
//! - Listing page parsing into resort stubs
//! - Detail page parsing into raw weather data
//! - Fixed courtesy delays between requests
//! - Overall crawl coordination

mod detail;
mod driver;
mod fetcher;
mod listing;
mod pacer;

pub use detail::{fetch_detail, metric_values, parse_detail};
pub use driver::{run_crawl, CrawlOutput, Crawler};
pub use fetcher::{build_http_client, fetch_page};
pub use listing::{is_nothing_found, parse_listing, parse_listing_page, ListingPage};
pub use pacer::Pacer;

use scraper::ElementRef;

/// Returns the element's text with runs of whitespace collapsed to one space
pub(crate) fn collapsed_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
