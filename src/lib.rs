//! Snowcard-Report: a ski-resort snow report builder
//!
//! This crate crawls the Snowcard Tirol resort directory, extracts per-resort
//! snow and weather data from listing and detail pages, and renders the result
//! into a single static, client-sortable HTML report.

pub mod config;
pub mod crawler;
pub mod normalize;
pub mod output;
pub mod resort;
pub mod url;

use thiserror::Error;

/// Main error type for Snowcard-Report operations
#[derive(Debug, Error)]
pub enum SnowcardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a single page fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Snowcard-Report operations
pub type Result<T> = std::result::Result<T, SnowcardError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, CrawlOutput, Crawler};
pub use normalize::{is_fresh, normalize_date, normalize_number, MissingValuePolicy};
pub use output::{render_report, write_report, CrawlStatistics};
pub use resort::{DetailData, DetailOutcome, ResortRecord, ResortStub};
