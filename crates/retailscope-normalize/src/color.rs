//! Color normalization.
//!
//! Raw color cells mix German and English vocabulary, retail jargon
//! (`"offwhite"`, `"jet"`) and multi-color combinations (`"schwarz/weiß"`,
//! `"black and white"`). Everything collapses onto the canonical names in
//! [`crate::taxonomy::COLOR_TOKENS`], with [`MULTICOLOR`] for genuine mixes.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use retailscope_core::UNKNOWN;

use crate::taxonomy::{lookup_color, MULTICOLOR};

/// Combination separators, tried in order. The first one present whose
/// parts map to a known color decides the result.
static MIX_SEPARATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"/",
        r"-",
        r",",
        r" & ",
        r" und ",
        r"\+",
        r"\s+mit\s+",
        r"\s+and\s+",
        r"\s*\+\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid color separator regex"))
    .collect()
});

static TOKEN_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ,/\-]+").expect("valid color token regex"));

/// Canonical color for a raw `color` / `colors` cell.
///
/// Never fails: unseen vocabulary passes through as its capitalized first
/// word, and a missing or blank cell is [`UNKNOWN`].
#[must_use]
pub fn normalize_color(raw: Option<&str>) -> String {
    let Some(value) = raw.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) else {
        return UNKNOWN.to_owned();
    };

    if let Some(color) = resolve_mix(&value) {
        return color.to_owned();
    }

    if let Some(color) = lookup_color(&value) {
        return color.to_owned();
    }

    if let Some(color) = TOKEN_DELIMITERS.split(&value).find_map(lookup_color) {
        return color.to_owned();
    }

    value
        .split_whitespace()
        .next()
        .map_or_else(|| UNKNOWN.to_owned(), capitalize)
}

fn resolve_mix(value: &str) -> Option<&'static str> {
    for separator in MIX_SEPARATORS.iter() {
        if !separator.is_match(value) {
            continue;
        }
        let mapped: BTreeSet<&'static str> = separator
            .split(value)
            .filter_map(|part| lookup_color(part.trim()))
            .collect();
        match mapped.len() {
            0 => {}
            1 => return mapped.into_iter().next(),
            _ => return Some(MULTICOLOR),
        }
    }
    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
