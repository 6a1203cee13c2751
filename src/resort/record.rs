/// A resort entry as it appears on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResortStub {
    /// Resort name; never empty
    pub name: String,

    /// Resort's own external website, taken verbatim (may be empty)
    pub website: String,

    /// Absolute URL of the directory's detail page; never empty
    pub detail_url: String,
}

/// Raw display strings extracted from a detail page
///
/// Every field may be empty when the page lacks the corresponding box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailData {
    pub snow_min: String,
    pub snow_max: String,
    pub temp_min: String,
    pub temp_max: String,
    pub last_snowfall: String,
    pub status: String,
}

/// Result of fetching and parsing one detail page
#[derive(Debug)]
pub enum DetailOutcome {
    /// Page fetched and parsed; individual fields may still be empty
    Fetched(DetailData),

    /// Fetch failed; the crawl continues with a blank record
    Failed {
        /// Error description, for logging
        error: String,
    },
}

impl DetailOutcome {
    /// Returns the parsed data, or an all-blank record on failure
    pub fn into_data(self) -> DetailData {
        match self {
            DetailOutcome::Fetched(data) => data,
            DetailOutcome::Failed { .. } => DetailData::default(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DetailOutcome::Failed { .. })
    }
}

/// A fully assembled resort row
///
/// Values are kept as scraped; normalization happens at render time.
/// Duplicate names are allowed, each produces its own row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResortRecord {
    pub name: String,
    pub website: String,
    pub detail_url: String,
    pub snow_min: String,
    pub snow_max: String,
    pub temp_min: String,
    pub temp_max: String,
    pub last_snowfall: String,
    pub status: String,
}

impl ResortRecord {
    /// Merges a listing stub with the detail data scraped for it
    pub fn from_parts(stub: ResortStub, detail: DetailData) -> Self {
        Self {
            name: stub.name,
            website: stub.website,
            detail_url: stub.detail_url,
            snow_min: detail.snow_min,
            snow_max: detail.snow_max,
            temp_min: detail.temp_min,
            temp_max: detail.temp_max,
            last_snowfall: detail.last_snowfall,
            status: detail.status,
        }
    }
}
