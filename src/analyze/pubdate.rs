//! Issue-level publication date extraction.

use chrono::NaiveDate;
use regex::Regex;

/// Spanish month names in calendar order.
const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn month_number(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lowered)
        .map(|i| i as u32 + 1)
}

/// Extract the issue publication date from the masthead header idiom
/// `Bogotá, D. C., <weekday>, <day> de <month> de <year>`.
///
/// Returns ISO `YYYY-MM-DD`, or the empty string when the header is absent
/// or any component fails to parse. This is a best-effort field.
pub fn extract_publication_date(text: &str) -> String {
    try_extract(text).unwrap_or_default()
}

fn try_extract(text: &str) -> Option<String> {
    let re = Regex::new(
        r"(?i)Bogot[áa],?\s*D\.?\s*C\.?\s*,\s*[^,\n]+,\s*(\d{1,2})\s+de\s+(\p{L}+)\s+de\s+(\d{4})",
    )
    .unwrap();

    let caps = re.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
