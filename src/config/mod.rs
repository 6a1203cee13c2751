//! Configuration module for Snowcard-Report
//!
//! Every tunable has a built-in default, so a run without a config file
//! crawls the public Snowcard Tirol directory with the stock settings.
//! A TOML file can override any subset of the values.
//!
//! # Example
//!
//! ```no_run
//! use snowcard_report::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("snowcard.toml")).unwrap();
//! println!("Report will be written to: {}", config.output.report_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
