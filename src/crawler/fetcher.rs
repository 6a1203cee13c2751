//! HTTP fetcher implementation
//!
//! Every page is fetched with a fixed user agent and request timeout. Bodies
//! are always decoded as UTF-8 regardless of the declared charset, since the
//! directory site mislabels its encoding.

use crate::config::SiteConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The site configuration (user agent and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use snowcard_report::config::SiteConfig;
/// use snowcard_report::crawler::build_http_client;
///
/// let client = build_http_client(&SiteConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_secs);

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its markup
///
/// No retries are attempted. Transport errors, timeouts and non-2xx
/// responses are all reported as a `FetchError`.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    tracing::trace!("Received {} bytes from {}", body.len(), url);

    Ok(String::from_utf8_lossy(&body).into_owned())
}
