//! Price coercion, discount and pack-size derivation.

use std::sync::LazyLock;

use regex::Regex;

/// Pack sizes at or above this are treated as product codes, not packs.
const MAX_PACK_SIZE: u32 = 20;

static PACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:pack|er pack|-pack|x)").expect("valid pack size regex")
});

/// Derived pricing fields for one listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDerivation {
    pub initial_price: Option<f64>,
    pub final_price: Option<f64>,
    pub discount_pct: Option<f64>,
    pub pack_size: u32,
    pub price_per_item: Option<f64>,
}

/// Coerces raw prices and derives discount, pack size and per-item price.
#[must_use]
pub fn derive_pricing(
    initial_raw: Option<&str>,
    final_raw: Option<&str>,
    name: &str,
) -> PriceDerivation {
    let initial_price = parse_price(initial_raw);
    let final_price = parse_price(final_raw);
    let pack_size = parse_pack_size(name);
    PriceDerivation {
        initial_price,
        final_price,
        discount_pct: discount_pct(initial_price, final_price),
        pack_size,
        price_per_item: price_per_item(final_price, pack_size),
    }
}

/// Parses a price cell. Anything that is not a finite number is `None`.
#[must_use]
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Percentage off the initial price, rounded to two decimals.
///
/// `None` when either price is missing or the initial price is zero.
#[must_use]
pub fn discount_pct(initial: Option<f64>, final_price: Option<f64>) -> Option<f64> {
    let (initial, final_price) = (initial?, final_price?);
    if initial == 0.0 {
        return None;
    }
    Some(round2((initial - final_price) / initial * 100.0))
}

/// Units per listing read from the display name (`"3 Pack"`, `"3er Pack"`,
/// `"3-Pack"`, `"3x"`). Defaults to 1; values outside `1..20` are ignored.
#[must_use]
pub fn parse_pack_size(name: &str) -> u32 {
    PACK_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| (1..MAX_PACK_SIZE).contains(n))
        .unwrap_or(1)
}

/// Final price divided across the pack. A zero pack counts as one unit.
#[must_use]
pub fn price_per_item(final_price: Option<f64>, pack_size: u32) -> Option<f64> {
    final_price.map(|p| p / f64::from(pack_size.max(1)))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
