//! Detail page parser
//!
//! Weather data is laid out as labelled boxes: an `h6` label inside a
//! `div.location_weatherdata_item` container, with the values in `strong`
//! elements of the same container. Missing boxes leave fields empty.

use crate::crawler::collapsed_text;
use crate::crawler::fetcher::fetch_page;
use crate::resort::{DetailData, DetailOutcome};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

pub const METRIC_LABEL_SELECTOR: &str = "h6";
pub const METRIC_CONTAINER_CLASS: &str = "location_weatherdata_item";
pub const METRIC_VALUE_SELECTOR: &str = "strong";
pub const STATUS_SELECTOR: &str = "div.status";

pub const LABEL_TEMPERATURE: &str = "Temperatur";
pub const LABEL_SNOW_DEPTH: &str = "Schneehöhe";
pub const LABEL_LAST_SNOWFALL: &str = "Letzter Schneefall";

/// Fetches and parses one detail page
///
/// Never fails: fetch errors are turned into `DetailOutcome::Failed` so a
/// single broken resort cannot abort the crawl.
pub async fn fetch_detail(client: &Client, url: &str) -> DetailOutcome {
    match fetch_page(client, url).await {
        Ok(html) => DetailOutcome::Fetched(parse_detail(&html)),
        Err(e) => DetailOutcome::Failed {
            error: e.to_string(),
        },
    }
}

/// Extracts the raw weather strings from a detail page
///
/// Snow depth and temperature take the first two values of their box
/// (min, max); last snowfall takes the first value only. The status field is
/// best-effort and stays empty when the page has no status element.
pub fn parse_detail(html: &str) -> DetailData {
    let document = Html::parse_document(html);

    let [snow_min, snow_max] = first_two(metric_values(&document, LABEL_SNOW_DEPTH));
    let [temp_min, temp_max] = first_two(metric_values(&document, LABEL_TEMPERATURE));
    let last_snowfall = metric_values(&document, LABEL_LAST_SNOWFALL)
        .into_iter()
        .next()
        .unwrap_or_default();

    DetailData {
        snow_min,
        snow_max,
        temp_min,
        temp_max,
        last_snowfall,
        status: extract_status(&document),
    }
}

/// Collects the emphasized values of the box labelled `label`
///
/// Returns an empty list when no `h6` has exactly this text or when the
/// label sits outside a weather data container.
pub fn metric_values(document: &Html, label: &str) -> Vec<String> {
    let (Ok(label_selector), Ok(value_selector)) = (
        Selector::parse(METRIC_LABEL_SELECTOR),
        Selector::parse(METRIC_VALUE_SELECTOR),
    ) else {
        return Vec::new();
    };

    let Some(heading) = document
        .select(&label_selector)
        .find(|heading| collapsed_text(heading) == label)
    else {
        return Vec::new();
    };

    let Some(container) = metric_container(heading) else {
        tracing::debug!("Label '{}' has no weather data container", label);
        return Vec::new();
    };

    container
        .select(&value_selector)
        .map(|value| collapsed_text(&value))
        .collect()
}

/// Finds the nearest enclosing weather data container
fn metric_container(heading: ElementRef) -> Option<ElementRef> {
    heading
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| {
            element.value().name() == "div"
                && element
                    .value()
                    .classes()
                    .any(|class| class == METRIC_CONTAINER_CLASS)
        })
}

fn extract_status(document: &Html) -> String {
    let Ok(status_selector) = Selector::parse(STATUS_SELECTOR) else {
        return String::new();
    };

    document
        .select(&status_selector)
        .next()
        .map(|status| collapsed_text(&status))
        .unwrap_or_default()
}

/// Pads with empty strings to exactly two slots; extra values are dropped
fn first_two(values: Vec<String>) -> [String; 2] {
    let mut values = values.into_iter();
    [
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
    ]
}
