//! Crawl driver - main crawl orchestration logic
//!
//! This module walks the directory index and assembles resort records:
//! - Paginating each index letter until an empty or "nothing found" page
//! - Fetching one detail page per collected resort
//! - Pacing successive requests with fixed courtesy delays
//! - Rendering and writing the final report

use crate::config::Config;
use crate::crawler::detail::fetch_detail;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::listing::parse_listing_page;
use crate::crawler::pacer::Pacer;
use crate::output::{count_fresh, render_report, write_report, CrawlStatistics};
use crate::resort::{DetailOutcome, ResortRecord, ResortStub};
use crate::url::listing_page_url;
use crate::SnowcardError;
use chrono::Utc;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Records and counters produced by one crawl
#[derive(Debug, Clone)]
pub struct CrawlOutput {
    /// One record per listing entry, in crawl order
    pub records: Vec<ResortRecord>,

    /// Counters gathered along the way
    pub stats: CrawlStatistics,
}

/// Main crawler structure
pub struct Crawler {
    config: Config,
    client: Client,
    base_url: Url,
    listing_pacer: Pacer,
    detail_pacer: Pacer,
}

impl Crawler {
    /// Creates a new crawler instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(SnowcardError)` - Invalid base URL or HTTP client failure
    pub fn new(config: Config) -> Result<Self, SnowcardError> {
        let base_url = Url::parse(&config.site.base_url)?;
        let client = build_http_client(&config.site).map_err(SnowcardError::Client)?;
        let listing_pacer = Pacer::from_millis(config.crawl.listing_delay_ms);
        let detail_pacer = Pacer::from_millis(config.crawl.detail_delay_ms);

        Ok(Self {
            config,
            client,
            base_url,
            listing_pacer,
            detail_pacer,
        })
    }

    /// Returns the configuration this crawler runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the listing and detail phases
    ///
    /// A failed listing page aborts the crawl; failed detail pages degrade
    /// to blank records.
    pub async fn run(&mut self) -> Result<CrawlOutput, SnowcardError> {
        let mut stats = CrawlStatistics::default();

        let stubs = self.collect_stubs(&mut stats).await?;
        tracing::info!(
            "{} resorts found in total, loading weather data",
            stubs.len()
        );

        let records = self.collect_records(stubs, &mut stats).await;

        Ok(CrawlOutput { records, stats })
    }

    /// Walks every index letter and collects resort stubs
    pub async fn collect_stubs(
        &mut self,
        stats: &mut CrawlStatistics,
    ) -> Result<Vec<ResortStub>, SnowcardError> {
        let letters: Vec<char> = self.config.crawl.letters.chars().collect();
        let mut stubs = Vec::new();

        for letter in letters {
            stats.letters_scanned += 1;
            let mut page = 1;

            loop {
                let url = listing_page_url(&self.config.site.base_url, letter, page);
                self.listing_pacer.wait().await;

                let html = fetch_page(&self.client, &url).await?;
                stats.listing_pages += 1;

                let listing = parse_listing_page(&html, &self.base_url);
                if listing.is_last() {
                    tracing::debug!(
                        "[{} page {}] end of listing (nothing found: {})",
                        letter.to_ascii_uppercase(),
                        page,
                        listing.nothing_found
                    );
                    break;
                }

                tracing::info!(
                    "[{} page {}] {} entries found",
                    letter.to_ascii_uppercase(),
                    page,
                    listing.stubs.len()
                );
                stats.resorts_found += listing.stubs.len() as u64;
                stubs.extend(listing.stubs);
                page += 1;
            }
        }

        Ok(stubs)
    }

    /// Fetches the detail page for every stub and merges the results
    pub async fn collect_records(
        &mut self,
        stubs: Vec<ResortStub>,
        stats: &mut CrawlStatistics,
    ) -> Vec<ResortRecord> {
        let mut records = Vec::with_capacity(stubs.len());

        for stub in stubs {
            self.detail_pacer.wait().await;

            let outcome = fetch_detail(&self.client, &stub.detail_url).await;
            if let DetailOutcome::Failed { error } = &outcome {
                tracing::warn!("Failed to load {} ({}): {}", stub.name, stub.detail_url, error);
                stats.detail_failures += 1;
            }

            let record = ResortRecord::from_parts(stub, outcome.into_data());
            tracing::info!("{}: {}", record.name, record.last_snowfall);
            records.push(record);
        }

        records
    }
}

/// Runs the full pipeline: crawl, render, write
///
/// Nothing is written until every resort has been processed; the report
/// file is overwritten on each run.
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Crawl completed and report written
/// * `Err(SnowcardError)` - Listing fetch failed or the report could not be written
///
/// # Example
///
/// ```no_run
/// use snowcard_report::config::Config;
/// use snowcard_report::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = run_crawl(Config::default()).await?;
/// println!("{} resorts", stats.resorts_found);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlStatistics, SnowcardError> {
    let mut crawler = Crawler::new(config)?;
    let CrawlOutput { records, mut stats } = crawler.run().await?;

    let generated_at = Utc::now();
    let output = &crawler.config().output;
    let html = render_report(&records, output, generated_at);
    stats.fresh_resorts = count_fresh(&records, generated_at.timestamp());

    write_report(Path::new(&output.report_path), &html)?;
    tracing::info!("HTML report saved to: {}", output.report_path);

    Ok(stats)
}
