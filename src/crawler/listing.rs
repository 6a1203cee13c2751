//! Listing page parser
//!
//! A listing page enumerates resorts for one index letter. The structural
//! contract with the directory site:
//!
//! - each resort is a `div.skigebiete_list_item`
//! - its name is the text of the first `h5` inside the item
//! - its links sit in `div.links`; anchor text "Website" marks the resort's
//!   own site, anchor text "Infos" marks the directory's detail page
//! - a page past the last one says "Leider nichts gefunden"

use crate::crawler::collapsed_text;
use crate::resort::ResortStub;
use crate::url::resolve_detail_url;
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub const LIST_ITEM_SELECTOR: &str = "div.skigebiete_list_item";
pub const ITEM_NAME_SELECTOR: &str = "h5";
pub const ITEM_LINK_SELECTOR: &str = "div.links a";
pub const WEBSITE_LINK_TEXT: &str = "Website";
pub const DETAIL_LINK_TEXT: &str = "Infos";

/// Site phrase shown when a letter has no (more) entries
pub const NOTHING_FOUND_MARKER: &str = "Leider nichts gefunden";

/// One parsed listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// The page carries the "nothing found" marker
    pub nothing_found: bool,

    /// Resort entries, in document order
    pub stubs: Vec<ResortStub>,
}

impl ListingPage {
    /// Returns true when pagination for this letter should stop
    pub fn is_last(&self) -> bool {
        self.nothing_found || self.stubs.is_empty()
    }
}

/// Parses a listing page, including the end-of-pagination check
///
/// # Arguments
///
/// * `html` - The listing page markup
/// * `base_url` - Directory base URL for resolving detail links
pub fn parse_listing_page(html: &str, base_url: &Url) -> ListingPage {
    let document = Html::parse_document(html);

    ListingPage {
        nothing_found: document_has_marker(&document),
        stubs: extract_stubs(&document, base_url),
    }
}

/// Extracts resort stubs from a listing page
///
/// Items without a name or without a resolvable "Infos" link are skipped.
///
/// # Example
///
/// ```
/// use snowcard_report::crawler::parse_listing;
/// use url::Url;
///
/// let html = r#"<div class="skigebiete_list_item"><h5>Kaunertal</h5>
///     <div class="links"><a href="/skigebiete/kaunertal">Infos</a></div></div>"#;
/// let base = Url::parse("https://www.snowcard.tirol.at/skigebiete").unwrap();
/// let stubs = parse_listing(html, &base);
/// assert_eq!(stubs[0].detail_url, "https://www.snowcard.tirol.at/skigebiete/kaunertal");
/// ```
pub fn parse_listing(html: &str, base_url: &Url) -> Vec<ResortStub> {
    extract_stubs(&Html::parse_document(html), base_url)
}

/// Returns true if the page says nothing was found
pub fn is_nothing_found(html: &str) -> bool {
    document_has_marker(&Html::parse_document(html))
}

fn document_has_marker(document: &Html) -> bool {
    document
        .root_element()
        .text()
        .collect::<String>()
        .contains(NOTHING_FOUND_MARKER)
}

fn extract_stubs(document: &Html, base_url: &Url) -> Vec<ResortStub> {
    let (Ok(item_selector), Ok(name_selector), Ok(link_selector)) = (
        Selector::parse(LIST_ITEM_SELECTOR),
        Selector::parse(ITEM_NAME_SELECTOR),
        Selector::parse(ITEM_LINK_SELECTOR),
    ) else {
        return Vec::new();
    };

    document
        .select(&item_selector)
        .filter_map(|item| parse_item(item, &name_selector, &link_selector, base_url))
        .collect()
}

/// Parses one list item; later matching anchors override earlier ones
fn parse_item(
    item: ElementRef,
    name_selector: &Selector,
    link_selector: &Selector,
    base_url: &Url,
) -> Option<ResortStub> {
    let name = item
        .select(name_selector)
        .next()
        .map(|heading| collapsed_text(&heading))
        .filter(|name| !name.is_empty())?;

    let mut website = String::new();
    let mut detail_url = None;

    for anchor in item.select(link_selector) {
        let href = anchor.value().attr("href").unwrap_or("");
        if href.trim().is_empty() {
            continue;
        }

        let text = collapsed_text(&anchor);
        if text.contains(WEBSITE_LINK_TEXT) {
            website = href.to_string();
        } else if text.contains(DETAIL_LINK_TEXT) {
            detail_url = resolve_detail_url(base_url, href);
        }
    }

    let Some(detail_url) = detail_url else {
        tracing::debug!("Skipping '{}': no detail link", name);
        return None;
    };

    Some(ResortStub {
        name,
        website,
        detail_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://www.snowcard.tirol.at/skigebiete").unwrap()
    }

    fn item(name: Option<&str>, links: &str) -> String {
        let heading = name.map(|n| format!("<h5>{}</h5>", n)).unwrap_or_default();
        format!(
            r#"<div class="skigebiete_list_item">{}<div class="links">{}</div></div>"#,
            heading, links
        )
    }

    fn page(items: &[String]) -> String {
        format!("<html><body>{}</body></html>", items.join("\n"))
    }

    #[test]
    fn test_complete_item() {
        let html = page(&[item(
            Some("Axamer Lizum"),
            r#"<a href="https://www.axamer-lizum.at">Website</a>
               <a href="/skigebiete/axamer-lizum">Infos</a>"#,
        )]);

        let stubs = parse_listing(&html, &base_url());

        assert_eq!(
            stubs,
            vec![ResortStub {
                name: "Axamer Lizum".to_string(),
                website: "https://www.axamer-lizum.at".to_string(),
                detail_url: "https://www.snowcard.tirol.at/skigebiete/axamer-lizum".to_string(),
            }]
        );
    }

    #[test]
    fn test_item_without_website_kept() {
        let html = page(&[item(
            Some("Bergeralm"),
            r#"<a href="/skigebiete/bergeralm">Infos</a>"#,
        )]);

        let stubs = parse_listing(&html, &base_url());
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].website, "");
    }

    #[test]
    fn test_item_without_name_skipped() {
        let html = page(&[item(None, r#"<a href="/skigebiete/x">Infos</a>"#)]);
        assert!(parse_listing(&html, &base_url()).is_empty());
    }

    #[test]
    fn test_item_with_blank_name_skipped() {
        let html = page(&[item(Some("   "), r#"<a href="/skigebiete/x">Infos</a>"#)]);
        assert!(parse_listing(&html, &base_url()).is_empty());
    }

    #[test]
    fn test_item_without_detail_link_skipped() {
        let html = page(&[item(
            Some("Nur Website"),
            r#"<a href="https://example.at">Website</a>"#,
        )]);
        assert!(parse_listing(&html, &base_url()).is_empty());
    }

    #[test]
    fn test_detail_link_with_empty_href_skipped() {
        let html = page(&[item(Some("Leer"), r#"<a href="">Infos</a>"#)]);
        assert!(parse_listing(&html, &base_url()).is_empty());
    }

    #[test]
    fn test_website_href_taken_verbatim() {
        let html = page(&[item(
            Some("Relativ"),
            r#"<a href="relative/site">Website</a><a href="/skigebiete/relativ">Infos</a>"#,
        )]);

        let stubs = parse_listing(&html, &base_url());
        assert_eq!(stubs[0].website, "relative/site");
    }

    #[test]
    fn test_name_whitespace_collapsed() {
        let html = page(&[item(
            Some("\n  Ski Juwel\n   Alpbachtal  "),
            r#"<a href="/skigebiete/juwel">Mehr Infos</a>"#,
        )]);

        let stubs = parse_listing(&html, &base_url());
        assert_eq!(stubs[0].name, "Ski Juwel Alpbachtal");
    }

    #[test]
    fn test_links_outside_links_section_ignored() {
        let html = page(&[r#"<div class="skigebiete_list_item"><h5>Draußen</h5>
               <a href="/skigebiete/draussen">Infos</a></div>"#
            .to_string()]);
        assert!(parse_listing(&html, &base_url()).is_empty());
    }

    #[test]
    fn test_mixed_items_in_order() {
        let html = page(&[
            item(Some("Eins"), r#"<a href="/skigebiete/eins">Infos</a>"#),
            item(Some("Kaputt"), ""),
            item(Some("Zwei"), r#"<a href="/skigebiete/zwei">Infos</a>"#),
        ]);

        let names: Vec<_> = parse_listing(&html, &base_url())
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Eins", "Zwei"]);
    }

    #[test]
    fn test_nothing_found_marker() {
        let html = "<html><body><p>Leider nichts gefunden.</p></body></html>";
        assert!(is_nothing_found(html));

        let listing = parse_listing_page(html, &base_url());
        assert!(listing.nothing_found);
        assert!(listing.is_last());
    }

    #[test]
    fn test_empty_page_is_last() {
        let listing = parse_listing_page("<html><body></body></html>", &base_url());
        assert!(!listing.nothing_found);
        assert!(listing.is_last());
    }

    #[test]
    fn test_page_with_entries_is_not_last() {
        let html = page(&[item(Some("Eins"), r#"<a href="/skigebiete/eins">Infos</a>"#)]);
        let listing = parse_listing_page(&html, &base_url());
        assert!(!listing.is_last());
        assert_eq!(listing.stubs.len(), 1);
    }
}
