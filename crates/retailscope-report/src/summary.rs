//! Brand-level and category-level aggregations.

use std::collections::{BTreeMap, BTreeSet};

use retailscope_core::{same_brand, NormalizedRecord};
use serde::Serialize;

use crate::stats::{mean, percentage, OTHER_CATEGORY};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSummary {
    pub brand: String,
    pub products: usize,
    pub mean_final_price: Option<f64>,
    pub mean_price_per_item: Option<f64>,
    pub mean_discount_pct: Option<f64>,
    /// Distinct main categories carried; unclassified listings not counted.
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketShare {
    pub brand: String,
    pub products: usize,
    /// Share of all listings, in percent.
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub products: usize,
    pub mean_final_price: Option<f64>,
    pub mean_discount_pct: Option<f64>,
}

/// Per-brand summary, largest assortment first and ties broken by name.
#[must_use]
pub fn brand_summaries(records: &[NormalizedRecord]) -> Vec<BrandSummary> {
    let mut groups: BTreeMap<&str, Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.brand_clean.as_str())
            .or_default()
            .push(record);
    }

    let mut summaries: Vec<BrandSummary> = groups
        .into_iter()
        .map(|(brand, rows)| BrandSummary {
            brand: brand.to_owned(),
            products: rows.len(),
            mean_final_price: mean(rows.iter().map(|r| r.final_price)),
            mean_price_per_item: mean(rows.iter().map(|r| r.price_per_item)),
            mean_discount_pct: mean(rows.iter().map(|r| r.discount_pct)),
            categories: rows
                .iter()
                .filter_map(|r| r.category_clean)
                .collect::<BTreeSet<_>>()
                .len(),
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.products
            .cmp(&a.products)
            .then_with(|| a.brand.cmp(&b.brand))
    });
    summaries
}

/// The `top_n` brands by listing count. `focus_brand` is appended when it
/// has listings but falls outside the top N.
#[must_use]
pub fn market_share(
    records: &[NormalizedRecord],
    top_n: usize,
    focus_brand: &str,
) -> Vec<MarketShare> {
    let total = records.len();
    let ranked = brand_summaries(records);

    let to_share = |s: &BrandSummary| MarketShare {
        brand: s.brand.clone(),
        products: s.products,
        share_pct: percentage(s.products, total),
    };

    let mut shares: Vec<MarketShare> = ranked.iter().take(top_n).map(&to_share).collect();
    let focus_listed = shares
        .iter()
        .any(|s| same_brand(&s.brand, focus_brand));
    if !focus_listed {
        if let Some(focus) = ranked
            .iter()
            .find(|s| same_brand(&s.brand, focus_brand))
        {
            shares.push(to_share(focus));
        }
    }
    shares
}

/// Listings of `brand` grouped by main category, largest group first.
/// Unclassified listings are grouped under `"Other"`.
#[must_use]
pub fn category_breakdown(records: &[NormalizedRecord], brand: &str) -> Vec<CategoryBreakdown> {
    let mut groups: BTreeMap<&str, Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_brand(brand)) {
        let label = record
            .category_clean
            .map_or(OTHER_CATEGORY, |c| c.label());
        groups.entry(label).or_default().push(record);
    }

    let mut breakdown: Vec<CategoryBreakdown> = groups
        .into_iter()
        .map(|(category, rows)| CategoryBreakdown {
            category: category.to_owned(),
            products: rows.len(),
            mean_final_price: mean(rows.iter().map(|r| r.final_price)),
            mean_discount_pct: mean(rows.iter().map(|r| r.discount_pct)),
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.products
            .cmp(&a.products)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
