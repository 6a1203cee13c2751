//! HTML report generation
//!
//! Renders all resort records into one self-contained HTML document with
//! inline CSS and an inline script for sorting and filtering. Numeric and
//! date cells carry a `data-sort` attribute with the normalized value; the
//! script sorts by that attribute and falls back to the visible text.
//!
//! Markup is built with maud, which escapes every interpolated value.

use crate::config::OutputConfig;
use crate::normalize::{date_cell, number_cell, Unit};
use crate::resort::ResortRecord;
use crate::url::is_web_url;
use chrono::{DateTime, Utc};
use maud::{html, Escaper, Markup, PreEscaped, Render, DOCTYPE};
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Table header labels, in column order
pub const COLUMNS: [&str; 9] = [
    "Skigebiet",
    "Webseite",
    "Snowcard-Link",
    "Schnee min (cm)",
    "Schnee max (cm)",
    "Temp min (°C)",
    "Temp max (°C)",
    "Letzter Schneefall",
    "Offen",
];

/// CSS class marking rows with snowfall in the last 3 days
pub const FRESH_ROW_CLASS: &str = "fresh-snow";

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; background:#1b1f24; color:#e0e6ed; margin:20px; }
h1 { color:#4fc3f7; }
.meta { color:#8a96a3; font-size:0.9em; }
table { width:100%; border-collapse:collapse; margin-top:15px; background:#2a2f36; }
thead { background:#37414b; color:#ffffff; }
th, td { padding:10px; border-bottom:1px solid #444b55; text-align:left; }
th { cursor:pointer; user-select:none; }
th.sort-asc::after { content:" ▲"; }
th.sort-desc::after { content:" ▼"; }
tr:hover { background:#333941; }
.fresh-snow { background:#004d40; color:#fff; font-weight:bold; }
a { color:#4fc3f7; text-decoration:none; }
a:hover { text-decoration:underline; }
#searchInput { padding:8px; width:280px; margin-right:20px; border-radius:5px; border:1px solid #444b55; background:#2a2f36; color:#e0e6ed; }
"#;

// Column indices below must match COLUMNS
const SCRIPT: &str = r#"
const NAME_COLUMN = 0;
const DATE_COLUMN = 7;
const STATUS_COLUMN = 8;

const table = document.getElementById('skiTable');
const headers = Array.from(table.tHead.rows[0].cells);
const searchInput = document.getElementById('searchInput');
const filterOpen = document.getElementById('filterOpen');

function tryNumber(s) {
    if (s === undefined || s === null || s.trim() === '') return null;
    const n = Number(s);
    return isNaN(n) ? null : n;
}

function sortValue(cell) {
    const v = cell.dataset.sort;
    return (v !== undefined && v !== '') ? v : cell.innerText.trim();
}

function compareCells(a, b) {
    const aVal = sortValue(a), bVal = sortValue(b);
    const aNum = tryNumber(aVal), bNum = tryNumber(bVal);
    if (aNum !== null && bNum !== null) return aNum - bNum;
    return aVal.localeCompare(bVal, 'de', { numeric: true });
}

let sortCol = null, asc = true;

function sortBy(col, ascending) {
    sortCol = col;
    asc = ascending;
    const tbody = table.tBodies[0];
    Array.from(tbody.rows)
        .sort((r1, r2) => asc
            ? compareCells(r1.cells[col], r2.cells[col])
            : compareCells(r2.cells[col], r1.cells[col]))
        .forEach(r => tbody.appendChild(r));
    headers.forEach((th, i) => {
        th.classList.toggle('sort-asc', i === col && asc);
        th.classList.toggle('sort-desc', i === col && !asc);
    });
}

headers.forEach((th, i) => {
    th.addEventListener('click', () => sortBy(i, sortCol === i ? !asc : true));
});

function applyFilters() {
    const query = searchInput.value.toLowerCase();
    const openOnly = filterOpen.checked;
    Array.from(table.tBodies[0].rows).forEach(r => {
        const nameMatch = r.cells[NAME_COLUMN].innerText.toLowerCase().includes(query);
        const openMatch = !openOnly
            || r.cells[STATUS_COLUMN].innerText.toLowerCase().includes('offen');
        r.style.display = (nameMatch && openMatch) ? '' : 'none';
    });
}

searchInput.addEventListener('input', applyFilters);
filterOpen.addEventListener('change', applyFilters);

sortBy(DATE_COLUMN, false);
"#;

/// Scraped text rendered into the report
///
/// maud escapes `&`, `<`, `>` and `"`; apostrophes are encoded here too.
struct Text<'a>(&'a str);

impl Render for Text<'_> {
    fn render_to(&self, buffer: &mut String) {
        for (i, part) in self.0.split('\'').enumerate() {
            if i > 0 {
                buffer.push_str("&#39;");
            }
            // Writing into a String cannot fail
            let _ = Escaper::new(buffer).write_str(part);
        }
    }
}

/// Renders the HTML report for a set of resort records
///
/// # Arguments
///
/// * `records` - The resort rows, in crawl order
/// * `config` - Output settings (title, missing-value policy)
/// * `generated_at` - Report time, used for the fresh-snow highlight
///
/// # Returns
///
/// The complete HTML document
pub fn render_report(
    records: &[ResortRecord],
    config: &OutputConfig,
    generated_at: DateTime<Utc>,
) -> String {
    let now_epoch = generated_at.timestamp();
    let summary = format!(
        "{} Skigebiete · Stand: {} UTC",
        records.len(),
        generated_at.format("%d.%m.%Y %H:%M")
    );

    let document = html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="UTF-8";
                title { (Text(&config.title)) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (Text(&config.title)) }
                p.meta { (summary) }
                input type="text" id="searchInput" placeholder="Skigebiet suchen …";
                label {
                    input type="checkbox" id="filterOpen";
                    " nur offene Gebiete"
                }
                table id="skiTable" {
                    thead {
                        tr {
                            @for column in COLUMNS {
                                th { (column) }
                            }
                        }
                    }
                    tbody {
                        @for record in records {
                            (render_row(record, config, now_epoch))
                        }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    };

    document.into_string()
}

/// Renders one `<tr>` for a record
fn render_row(record: &ResortRecord, config: &OutputConfig, now_epoch: i64) -> Markup {
    let policy = config.missing_values;
    let numeric = [
        number_cell(&record.snow_min, Unit::Centimetres, policy),
        number_cell(&record.snow_max, Unit::Centimetres, policy),
        number_cell(&record.temp_min, Unit::Celsius, policy),
        number_cell(&record.temp_max, Unit::Celsius, policy),
    ];
    let last_snowfall = date_cell(&record.last_snowfall, policy, now_epoch);
    let row_class = last_snowfall.fresh.then_some(FRESH_ROW_CLASS);

    html! {
        tr class=[row_class] {
            td { (Text(&record.name)) }
            td { (link_or_text(&record.website, &record.website)) }
            td { (link_or_text(&record.detail_url, "Link")) }
            @for cell in numeric.iter().chain(std::iter::once(&last_snowfall.cell)) {
                td data-sort=(Text(&cell.sort)) { (Text(&cell.display)) }
            }
            td { (Text(&record.status)) }
        }
    }
}

/// Renders an anchor for http(s) targets and plain text for anything else
fn link_or_text(target: &str, label: &str) -> Markup {
    html! {
        @if is_web_url(target) {
            a href=(Text(target)) target="_blank" rel="noopener" { (Text(label)) }
        } @else {
            (Text(label))
        }
    }
}

/// Writes the rendered report to disk, replacing any existing file
///
/// # Arguments
///
/// * `output_path` - Path where the HTML file should be written
/// * `html` - The rendered document
pub fn write_report(output_path: &Path, html: &str) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;
    Ok(())
}
