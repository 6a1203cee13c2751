//! Resort data types flowing through the crawl pipeline
//!
//! - `ResortStub`: one entry scraped from a listing page
//! - `DetailData`: raw metric strings scraped from a detail page
//! - `DetailOutcome`: result of fetching one detail page
//! - `ResortRecord`: stub and detail data merged, ready for rendering

mod record;

pub use record::{DetailData, DetailOutcome, ResortRecord, ResortStub};
