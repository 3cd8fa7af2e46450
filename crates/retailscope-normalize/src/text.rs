//! Brand and product-name extraction.

use retailscope_core::UNKNOWN;

use crate::raw::{first_string_value, probe_keys, RawField};

const BRAND_KEYS: &[&str] = &["brand", "brand_name", "name"];
const NAME_KEYS: &[&str] = &["name", "title", "product_name", "text"];

/// Canonical, title-cased brand from a raw `brand` / `brand_name` cell.
///
/// Returns [`UNKNOWN`] when the cell is absent.
#[must_use]
pub fn clean_brand(raw: Option<&str>) -> String {
    extract_text(raw, BRAND_KEYS).map_or_else(|| UNKNOWN.to_owned(), |s| title_case(&s))
}

/// Whitespace-normalized product name from a raw `product_name` / `name`
/// cell.
///
/// Returns [`UNKNOWN`] when the cell is absent.
#[must_use]
pub fn clean_name(raw: Option<&str>) -> String {
    extract_text(raw, NAME_KEYS).unwrap_or_else(|| UNKNOWN.to_owned())
}

/// Display name for a listing: cleaned `product_name`, then cleaned `name`,
/// then either raw value. First non-empty candidate wins.
#[must_use]
pub fn best_name(product_name: Option<&str>, name: Option<&str>) -> String {
    extract_text(product_name, NAME_KEYS)
        .or_else(|| extract_text(name, NAME_KEYS))
        .or_else(|| non_blank(product_name))
        .or_else(|| non_blank(name))
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

/// Collapses runs of whitespace to a single space and trims both ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercases the first letter of every word and lowercases the rest.
///
/// A word starts at any letter not preceded by another letter, so
/// `"o'neill"` becomes `"O'Neill"` and `"h&m"` becomes `"H&M"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Best-effort text for a raw cell: a probed JSON string value, or the
/// whitespace-collapsed cell itself. `None` only when nothing usable remains.
fn extract_text(raw: Option<&str>, keys: &[&str]) -> Option<String> {
    let text = match RawField::parse(raw) {
        RawField::Missing => return None,
        RawField::Json(map) => probe_keys(&map, keys)
            .or_else(|| first_string_value(&map))
            .map(collapse_whitespace)
            // An object with no string values is kept as its literal text.
            .unwrap_or_else(|| collapse_whitespace(raw.unwrap_or_default())),
        RawField::Text(text) => collapse_whitespace(&text),
    };
    (!text.is_empty()).then_some(text)
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
