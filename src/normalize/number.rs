//! Numeric field normalization (snow depths and temperatures)

/// Unit suffixes and dash placeholders removed before parsing
const STRIP_TOKENS: &[&str] = &["cm", "°C", "°", "–", "—"];

/// Parses a scraped numeric display string
///
/// Unit suffixes and dash placeholders are removed, a decimal comma becomes a
/// decimal point, and then only digits, a minus sign ahead of the first digit
/// and the first decimal point after a digit are kept. Text around the number
/// (such as `ca.`) is dropped.
///
/// Returns `None` when nothing numeric remains.
///
/// # Examples
///
/// ```
/// use snowcard_report::normalize::parse_number;
///
/// assert_eq!(parse_number("120,5 cm"), Some(120.5));
/// assert_eq!(parse_number("-4 °C"), Some(-4.0));
/// assert_eq!(parse_number("–"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let mut cleaned = text.to_string();
    for token in STRIP_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    let cleaned = cleaned.trim().replace(',', ".");

    let mut filtered = String::with_capacity(cleaned.len());
    let mut seen_point = false;
    for c in cleaned.chars() {
        match c {
            '0'..='9' => filtered.push(c),
            '-' if filtered.is_empty() => filtered.push(c),
            '.' if !seen_point && filtered.ends_with(|d: char| d.is_ascii_digit()) => {
                seen_point = true;
                filtered.push(c);
            }
            _ => {}
        }
    }

    filtered.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a numeric display string, defaulting to `0.0`
///
/// Every cell stays numerically sortable: empty or non-numeric input yields
/// `0.0` rather than an absent value.
pub fn normalize_number(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}
