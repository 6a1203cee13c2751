//! Snowcard-Report main entry point
//!
//! This is the command-line interface for the Snowcard-Report crawler.

use anyhow::Context;
use clap::Parser;
use snowcard_report::config::{load_config, validate, Config};
use snowcard_report::crawler::run_crawl;
use snowcard_report::output::print_statistics;
use snowcard_report::url::listing_page_url;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Snowcard-Report: ski-resort snow report builder
///
/// Crawls the Snowcard Tirol resort directory letter by letter, loads the
/// weather data of every resort and writes a sortable HTML report.
/// Without arguments the stock settings are used.
#[derive(Parser, Debug)]
#[command(name = "snowcard-report")]
#[command(version = "1.0.0")]
#[command(about = "Builds a sortable snow report from the Snowcard Tirol directory", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the report to this path instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(output) = cli.output {
        config.output.report_path = output;
        validate(&config).context("Invalid output path")?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let report_path = config.output.report_path.clone();
    tracing::info!(
        "Starting crawl of {} ({} letters)",
        config.site.base_url,
        config.crawl.letters.len()
    );

    let stats = run_crawl(config).await.context("Crawl failed")?;

    if !cli.quiet {
        print_statistics(&stats, &report_path);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("snowcard_report=info,warn"),
            1 => EnvFilter::new("snowcard_report=debug,info"),
            2 => EnvFilter::new("snowcard_report=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Snowcard-Report Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  User agent: {}", config.site.user_agent);
    println!("  Timeout: {}s", config.site.timeout_secs);

    println!("\nCrawl:");
    println!("  Letters: {}", config.crawl.letters);
    println!("  Listing delay: {}ms", config.crawl.listing_delay_ms);
    println!("  Detail delay: {}ms", config.crawl.detail_delay_ms);

    println!("\nOutput:");
    println!("  Report: {}", config.output.report_path);
    println!("  Title: {}", config.output.title);
    println!("  Missing values: {:?}", config.output.missing_values);

    if let Some(first) = config.crawl.letters.chars().next() {
        println!("\nFirst listing pages:");
        println!("  {}", listing_page_url(&config.site.base_url, first, 1));
        println!("  {}", listing_page_url(&config.site.base_url, first, 2));
    }

    println!("\n✓ Configuration is valid");
}
