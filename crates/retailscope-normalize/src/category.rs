//! Keyword-based category classification.
//!
//! Category indicators arrive as retailer URLs, slash-delimited paths,
//! JSON blobs carrying a `url`, or free text (product names). The slug is
//! pulled out first, then scanned against the ordered keyword tables in
//! [`crate::taxonomy`]. A miss is `None`, never a default, so callers can
//! retry against a secondary source.

use retailscope_core::MainCategory;
use serde_json::Value;

use crate::raw::RawField;
use crate::taxonomy::{GENERIC_CATEGORY_PLACEHOLDERS, MAIN_CATEGORY_KEYWORDS, SPECIFIC_CATEGORY_KEYWORDS};

/// Last-segment suffixes treated as a page file rather than a category slug.
const PAGE_EXTENSIONS: &[&str] = &[".html", ".htm", ".php", ".aspx", ".jsp"];

/// Main and specific category for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub main: Option<MainCategory>,
    pub specific: Option<&'static str>,
}

/// Classifies `text` into a main and a specific category.
#[must_use]
pub fn classify(text: &str) -> Classification {
    match category_slug(Some(text)) {
        Some(slug) => Classification {
            main: first_keyword_match(&slug, MAIN_CATEGORY_KEYWORDS),
            specific: first_keyword_match(&slug, SPECIFIC_CATEGORY_KEYWORDS),
        },
        None => Classification::default(),
    }
}

/// Classifies a listing from its category indicator, falling back to its
/// display name.
///
/// Each level falls back independently: when the primary source yields no
/// match, or is a generic placeholder such as `"underwear"`, that level is
/// re-run against `fallback`.
#[must_use]
pub fn classify_with_fallback(primary: Option<&str>, fallback: &str) -> Classification {
    let slug = category_slug(primary).filter(|s| !is_generic_placeholder(s));
    let main = slug
        .as_deref()
        .and_then(|s| first_keyword_match(s, MAIN_CATEGORY_KEYWORDS));
    let specific = slug
        .as_deref()
        .and_then(|s| first_keyword_match(s, SPECIFIC_CATEGORY_KEYWORDS));

    if main.is_some() && specific.is_some() {
        return Classification { main, specific };
    }

    tracing::trace!(primary = ?primary, fallback, "classifying from secondary source");
    let secondary = classify(fallback);
    Classification {
        main: main.or(secondary.main),
        specific: specific.or(secondary.specific),
    }
}

/// Lowercased slug to classify for a raw category indicator.
///
/// - JSON object: the `url` field's category segment (`None` if absent).
/// - URL or absolute path: its category segment.
/// - Anything else: the whole text.
#[must_use]
pub fn category_slug(raw: Option<&str>) -> Option<String> {
    let slug = match RawField::parse(raw) {
        RawField::Missing => None,
        RawField::Json(map) => map
            .get("url")
            .and_then(Value::as_str)
            .and_then(path_category_segment),
        RawField::Text(text) if looks_like_path(&text) => path_category_segment(&text),
        RawField::Text(text) => Some(text),
    };
    slug.map(|s| s.to_lowercase())
}

/// `true` when `slug` is a known catch-all value with no category signal.
#[must_use]
pub fn is_generic_placeholder(slug: &str) -> bool {
    let lower = slug.trim().to_lowercase();
    GENERIC_CATEGORY_PLACEHOLDERS.contains(&lower.as_str())
}

/// First table value whose keyword is a substring of `slug`. Retries with
/// hyphens read as spaces before giving up.
fn first_keyword_match<T: Copy>(slug: &str, table: &[(&str, T)]) -> Option<T> {
    let lower = slug.to_lowercase();
    scan(&lower, table).or_else(|| scan(&lower.replace('-', " "), table))
}

fn scan<T: Copy>(haystack: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, value)| *value)
}

fn looks_like_path(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://") || text.starts_with('/')
}

/// Last non-empty path segment, or the one before it when the last names a
/// page file (`.../bhs/index.html` → `bhs`). Query and fragment are ignored.
fn path_category_segment(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let last = *parts.last()?;
    let is_page = PAGE_EXTENSIONS
        .iter()
        .any(|ext| last.to_lowercase().ends_with(ext));
    let segment = if is_page && parts.len() > 1 {
        parts[parts.len() - 2]
    } else {
        last
    };
    Some(segment.to_owned())
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
