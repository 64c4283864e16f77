// src/domain/format.rs

//! Pure field formatters. None of these fail: malformed input degrades to an
//! empty or placeholder value.

use base64::Engine;
use chrono::{DateTime, NaiveDate};
use scraper::Html;

pub const FILLED_STAR: char = '\u{2605}';
pub const HALF_STAR: char = '\u{2606}';
pub const EMPTY_STAR: char = '\u{2606}';
const STAR_SLOTS: usize = 5;

const LISTING_PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><rect fill="#ddd" width="100" height="100"/><text x="50" y="50" text-anchor="middle" dy=".3em" fill="#999">No Image</text></svg>"##;
const HOST_PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle fill="#ddd" cx="50" cy="50" r="50"/><text x="50" y="55" text-anchor="middle" fill="#999" font-size="40">?</text></svg>"##;

/// "$1,234.50" -> 1234.5. Absent or empty is 0; anything unparseable is NaN.
pub fn parse_price(text: Option<&str>) -> f64 {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return 0.0,
    };

    let stripped: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    leading_number(stripped.trim_start()).unwrap_or(f64::NAN)
}

/// Longest numeric prefix, so "120.00 USD" still reads as 120.
fn leading_number(s: &str) -> Option<f64> {
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let candidate = &s[..end];
    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
}

/// Five glyphs: one filled per whole point, a half glyph when the remainder is
/// at least .5, empty glyphs for the rest. No rating (or 0) renders nothing.
pub fn generate_stars(rating: Option<f64>) -> String {
    let rating = match rating {
        Some(r) if r.is_finite() && r != 0.0 => r.clamp(0.0, STAR_SLOTS as f64),
        _ => return String::new(),
    };

    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5 && full < STAR_SLOTS;

    let mut stars = String::with_capacity(STAR_SLOTS * 3);
    stars.extend(std::iter::repeat(FILLED_STAR).take(full));
    if half {
        stars.push(HALF_STAR);
    }
    let used = full + usize::from(half);
    stars.extend(std::iter::repeat(EMPTY_STAR).take(STAR_SLOTS - used));
    stars
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.2}")
}

/// The dataset stores amenities as a single-quoted list. Swap the quotes and
/// read it as JSON; anything that isn't a list of strings yields nothing.
pub fn parse_amenities(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Vec<String>>(&raw.replace('\'', "\"")) {
        Ok(items) => items,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable amenities, dropping");
            Vec::new()
        }
    }
}

/// "2015-03-14" -> "March 2015".
pub fn format_host_since(date_text: Option<&str>) -> String {
    let text = match date_text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return "Unknown".to_string(),
    };

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => d.format("%B %Y").to_string(),
        None => {
            tracing::debug!(value = text, "unparseable host_since date");
            "Unknown".to_string()
        }
    }
}

/// Visible text of an HTML fragment. The html5ever-based parser recovers from
/// unbalanced or truncated markup instead of failing.
pub fn strip_markup(html: Option<&str>) -> String {
    let html = match html {
        Some(h) if !h.is_empty() => h,
        _ => return String::new(),
    };

    Html::parse_fragment(html).root_element().text().collect()
}

pub fn listing_placeholder() -> String {
    svg_data_uri(LISTING_PLACEHOLDER_SVG)
}

pub fn host_placeholder() -> String {
    svg_data_uri(HOST_PLACEHOLDER_SVG)
}

fn svg_data_uri(svg: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg);
    format!("data:image/svg+xml;base64,{encoded}")
}
