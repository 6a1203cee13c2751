use crate::normalize::MissingValuePolicy;
use serde::Deserialize;

/// Default directory root; letters are appended as path segments
pub const DEFAULT_BASE_URL: &str = "https://www.snowcard.tirol.at/skigebiete";

/// Default User-Agent header sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default report file, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "skigebiete_snowcard.html";

/// Main configuration structure for Snowcard-Report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Source site and HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory root, e.g. `https://www.snowcard.tirol.at/skigebiete`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Crawl pacing and coverage
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Index letters to walk, in order
    pub letters: String,

    /// Pause between successive listing page fetches (milliseconds)
    #[serde(rename = "listing-delay-ms")]
    pub listing_delay_ms: u64,

    /// Pause between successive detail page fetches (milliseconds)
    #[serde(rename = "detail-delay-ms")]
    pub detail_delay_ms: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            letters: ('a'..='z').collect(),
            listing_delay_ms: 300,
            detail_delay_ms: 250,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated HTML file; overwritten on every run
    #[serde(rename = "report-path")]
    pub report_path: String,

    /// Document title shown in the browser tab
    pub title: String,

    /// How missing or unparseable values are rendered
    #[serde(rename = "missing-values")]
    pub missing_values: MissingValuePolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: DEFAULT_REPORT_PATH.to_string(),
            title: "Snowcard Tirol Skigebiete".to_string(),
            missing_values: MissingValuePolicy::default(),
        }
    }
}
