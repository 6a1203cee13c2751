//! URL handling for the resort directory
//!
//! Listing pages live at `{base}/{letter}` with a `page` query parameter from
//! page 2 onwards. Detail links on listing pages are relative and get
//! resolved against the directory base URL.

use url::Url;

/// Builds the URL of one listing page
///
/// Page 1 carries no `page` parameter.
///
/// # Examples
///
/// ```
/// use snowcard_report::url::listing_page_url;
///
/// let base = "https://www.snowcard.tirol.at/skigebiete";
/// assert_eq!(listing_page_url(base, 'a', 1), "https://www.snowcard.tirol.at/skigebiete/a");
/// assert_eq!(listing_page_url(base, 'a', 3), "https://www.snowcard.tirol.at/skigebiete/a?page=3");
/// ```
pub fn listing_page_url(base_url: &str, letter: char, page: u32) -> String {
    let base = base_url.trim_end_matches('/');
    if page <= 1 {
        format!("{}/{}", base, letter)
    } else {
        format!("{}/{}?page={}", base, letter, page)
    }
}

/// Resolves a detail-page href to an absolute URL
///
/// Returns None if the link should be excluded:
/// - empty hrefs
/// - hrefs that fail to resolve
/// - non-HTTP(S) URLs after resolution
pub fn resolve_detail_url(base_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if has_web_scheme(&absolute_url) => Some(absolute_url.to_string()),
        _ => None,
    }
}

/// Returns whether `text` is an absolute http(s) URL
///
/// Scraped links are only rendered as anchors when this holds.
pub fn is_web_url(text: &str) -> bool {
    Url::parse(text.trim())
        .map(|url| has_web_scheme(&url))
        .unwrap_or(false)
}

fn has_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
