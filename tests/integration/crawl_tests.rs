//! Integration tests for the crawler
//!
//! These tests use wiremock to stand in for the resort directory and test
//! the listing → detail → report pipeline end-to-end.

use snowcard_report::config::Config;
use snowcard_report::crawler::Crawler;
use snowcard_report::normalize::{normalize_date, normalize_number};
use snowcard_report::{run_crawl, FetchError, SnowcardError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests without a query string (page 1 of a listing)
struct NoQuery;

impl Match for NoQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none()
    }
}

/// Creates a test configuration pointing at the mock server
fn create_test_config(server_uri: &str, letters: &str, report_path: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = format!("{}/skigebiete", server_uri);
    config.site.timeout_secs = 5;
    config.crawl.letters = letters.to_string();
    config.crawl.listing_delay_ms = 0;
    config.crawl.detail_delay_ms = 0;
    config.output.report_path = report_path.to_string();
    config
}

fn listing_item(name: &str, links: &str) -> String {
    format!(
        r#"<div class="skigebiete_list_item">
             <h5>{}</h5>
             <div class="links">{}</div>
           </div>"#,
        name, links
    )
}

fn listing_page(items: &[String]) -> String {
    format!(
        "<html><body><div class=\"skigebiete_list\">{}</div></body></html>",
        items.join("\n")
    )
}

fn nothing_found_page() -> String {
    "<html><body><p>Leider nichts gefunden</p></body></html>".to_string()
}

fn detail_page(snow: [&str; 2], temp: [&str; 2], last_snowfall: &str) -> String {
    format!(
        r#"<html><body>
        <div class="location_weatherdata_item"><h6>Temperatur</h6>
            <div><strong>{}</strong> / <strong>{}</strong></div></div>
        <div class="location_weatherdata_item"><h6>Schneehöhe</h6>
            <div><strong>{}</strong> / <strong>{}</strong></div></div>
        <div class="location_weatherdata_item"><h6>Letzter Schneefall</h6>
            <strong>{}</strong></div>
        </body></html>"#,
        temp[0], temp[1], snow[0], snow[1], last_snowfall
    )
}

async fn mount_html(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_listing(server: &MockServer, letter: char, page: u32, body: String) {
    let page_path = format!("/skigebiete/{}", letter);
    let response = ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html");

    if page == 1 {
        Mock::given(method("GET"))
            .and(path(page_path.as_str()))
            .and(NoQuery)
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
    } else {
        Mock::given(method("GET"))
            .and(path(page_path.as_str()))
            .and(query_param("page", page.to_string().as_str()))
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_full_crawl_single_letter() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        'a',
        1,
        listing_page(&[
            listing_item(
                "Axamer Lizum",
                r#"<a href="https://www.axamer-lizum.at">Website</a>
                   <a href="/skigebiete/axamer-lizum">Infos</a>"#,
            ),
            listing_item("Ohne Details", r#"<a href="https://example.at">Website</a>"#),
        ]),
    )
    .await;
    mount_listing(&mock_server, 'a', 2, nothing_found_page()).await;
    mount_html(
        &mock_server,
        "/skigebiete/axamer-lizum",
        detail_page(["80 cm", "150 cm"], ["-8 °C", "-2 °C"], "05.01.2024"),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "a", "unused.html");
    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let output = crawler.run().await.expect("Crawl failed");

    assert_eq!(output.records.len(), 1);
    let record = &output.records[0];
    assert_eq!(record.name, "Axamer Lizum");
    assert_eq!(record.website, "https://www.axamer-lizum.at");
    assert_eq!(
        record.detail_url,
        format!("{}/skigebiete/axamer-lizum", mock_server.uri())
    );
    assert_eq!(normalize_number(&record.snow_min), 80.0);
    assert_eq!(normalize_number(&record.snow_max), 150.0);
    assert_eq!(record.temp_min, "-8 °C");
    assert_ne!(normalize_date(&record.last_snowfall).1, 0);

    assert_eq!(output.stats.letters_scanned, 1);
    assert_eq!(output.stats.listing_pages, 2);
    assert_eq!(output.stats.resorts_found, 1);
    assert_eq!(output.stats.detail_failures, 0);
}

#[tokio::test]
async fn test_run_crawl_writes_report() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        'k',
        1,
        listing_page(&[listing_item(
            "Kühtai &lt;Test&gt;",
            r#"<a href="/skigebiete/kuehtai">Infos</a>"#,
        )]),
    )
    .await;
    mount_listing(&mock_server, 'k', 2, nothing_found_page()).await;
    mount_html(
        &mock_server,
        "/skigebiete/kuehtai",
        detail_page(["120,5 cm", "200 cm"], ["-10 °C", "-4 °C"], "–"),
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report_path = dir.path().join("report.html");
    std::fs::write(&report_path, "stale report").expect("Failed to seed report");

    let config = create_test_config(
        &mock_server.uri(),
        "k",
        report_path.to_str().expect("Non-UTF-8 temp path"),
    );
    let stats = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(stats.resorts_found, 1);
    assert_eq!(stats.fresh_resorts, 0);

    let html = std::fs::read_to_string(&report_path).expect("Report not written");
    assert!(!html.contains("stale report"));
    assert!(html.contains("<td>Kühtai &lt;Test&gt;</td>"));
    assert!(html.contains("<td data-sort=\"120.5\">120,5 cm</td>"));
    assert!(html.contains("<td data-sort=\"0\">1970-01-01</td>"));
}

#[tokio::test]
async fn test_pagination_across_letters() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        'a',
        1,
        listing_page(&[listing_item(
            "Eins",
            r#"<a href="/skigebiete/eins">Infos</a>"#,
        )]),
    )
    .await;
    mount_listing(
        &mock_server,
        'a',
        2,
        listing_page(&[
            listing_item("Zwei", r#"<a href="/skigebiete/zwei">Infos</a>"#),
            listing_item("Zwei", r#"<a href="/skigebiete/zwei">Infos</a>"#),
        ]),
    )
    .await;
    // Page 3 has neither entries nor the marker; an empty page also ends the letter
    mount_listing(&mock_server, 'a', 3, listing_page(&[])).await;
    mount_listing(&mock_server, 'b', 1, nothing_found_page()).await;

    for slug in ["eins", "zwei"] {
        mount_html(
            &mock_server,
            &format!("/skigebiete/{}", slug),
            detail_page(["10 cm", "20 cm"], ["0 °C", "1 °C"], "01.02.2024"),
        )
        .await;
    }

    let config = create_test_config(&mock_server.uri(), "ab", "unused.html");
    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let output = crawler.run().await.expect("Crawl failed");

    let names: Vec<_> = output.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Eins", "Zwei", "Zwei"]);
    assert_eq!(output.stats.letters_scanned, 2);
    assert_eq!(output.stats.listing_pages, 4);
}

#[tokio::test]
async fn test_failed_detail_degrades_to_blank_record() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        'f',
        1,
        listing_page(&[
            listing_item("Kaputt", r#"<a href="/skigebiete/kaputt">Infos</a>"#),
            listing_item("Heil", r#"<a href="/skigebiete/heil">Infos</a>"#),
        ]),
    )
    .await;
    mount_listing(&mock_server, 'f', 2, nothing_found_page()).await;

    Mock::given(method("GET"))
        .and(path("/skigebiete/kaputt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/skigebiete/heil",
        detail_page(["50 cm", "90 cm"], ["-1 °C", "3 °C"], "10.01.2024"),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "f", "unused.html");
    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let output = crawler.run().await.expect("Crawl must survive a failed detail page");

    assert_eq!(output.records.len(), 2);

    let broken = &output.records[0];
    assert_eq!(broken.name, "Kaputt");
    assert_eq!(
        broken.detail_url,
        format!("{}/skigebiete/kaputt", mock_server.uri())
    );
    assert_eq!(broken.snow_min, "");
    assert_eq!(broken.temp_max, "");
    assert_eq!(broken.last_snowfall, "");
    assert_eq!(broken.status, "");

    assert_eq!(output.records[1].snow_max, "90 cm");
    assert_eq!(output.stats.detail_failures, 1);
}

#[tokio::test]
async fn test_failed_listing_aborts_crawl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/skigebiete/x"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report_path = dir.path().join("report.html");
    let config = create_test_config(
        &mock_server.uri(),
        "x",
        report_path.to_str().expect("Non-UTF-8 temp path"),
    );

    let result = run_crawl(config).await;

    assert!(matches!(
        result,
        Err(SnowcardError::Fetch(FetchError::Status { status: 503, .. }))
    ));
    assert!(!report_path.exists(), "No report may be written on abort");
}
