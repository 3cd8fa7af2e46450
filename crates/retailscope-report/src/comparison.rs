//! Head-to-head comparison of the focus brand with one competitor.

use std::collections::BTreeMap;

use retailscope_core::{same_brand, NormalizedRecord};
use serde::Serialize;

use crate::stats::{group_by, mean};
use crate::stock::size_curve;
use crate::summary::brand_summaries;

/// Specific categories kept in the comparison, by combined listing count.
pub const COMPARISON_TOP_SPECIFIC: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideStats {
    pub products: usize,
    pub mean_final_price: Option<f64>,
    pub mean_discount_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: String,
    pub brand: SideStats,
    pub competitor: SideStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeComparison {
    pub size: String,
    pub brand: usize,
    pub competitor: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandComparison {
    pub brand: String,
    pub competitor: String,
    /// Main categories either brand carries, by name.
    pub by_category: Vec<CategoryComparison>,
    pub by_specific_category: Vec<CategoryComparison>,
    /// Available size variants per cleaned label, by label.
    pub size_curve: Vec<SizeComparison>,
}

/// Largest brand by listing count other than `brand`.
#[must_use]
pub fn default_competitor(records: &[NormalizedRecord], brand: &str) -> Option<String> {
    brand_summaries(records)
        .into_iter()
        .find(|s| !same_brand(&s.brand, brand))
        .map(|s| s.brand)
}

#[must_use]
pub fn brand_comparison(
    records: &[NormalizedRecord],
    brand: &str,
    competitor: &str,
) -> BrandComparison {
    let pair: Vec<&NormalizedRecord> = records
        .iter()
        .filter(|r| r.is_brand(brand) || r.is_brand(competitor))
        .collect();

    let by_category = compare_groups(
        group_by(pair.iter().copied(), |r| r.category_clean.map(|c| c.label())),
        brand,
        competitor,
    );

    let mut by_specific_category = compare_groups(
        group_by(pair.iter().copied(), |r| r.specific_category.as_deref()),
        brand,
        competitor,
    );
    by_specific_category.sort_by(|a, b| {
        let total = |c: &CategoryComparison| c.brand.products + c.competitor.products;
        total(b).cmp(&total(a)).then_with(|| a.category.cmp(&b.category))
    });
    by_specific_category.truncate(COMPARISON_TOP_SPECIFIC);

    let mut sizes: BTreeMap<String, SizeComparison> = BTreeMap::new();
    for count in size_curve(records, brand) {
        sizes.entry(count.size.clone()).or_insert_with(|| empty_size(&count.size)).brand =
            count.available;
    }
    for count in size_curve(records, competitor) {
        sizes.entry(count.size.clone()).or_insert_with(|| empty_size(&count.size)).competitor =
            count.available;
    }

    BrandComparison {
        brand: display_name(&pair, brand),
        competitor: display_name(&pair, competitor),
        by_category,
        by_specific_category,
        size_curve: sizes.into_values().collect(),
    }
}

fn compare_groups(
    groups: BTreeMap<&str, Vec<&NormalizedRecord>>,
    brand: &str,
    competitor: &str,
) -> Vec<CategoryComparison> {
    groups
        .into_iter()
        .map(|(category, rows)| CategoryComparison {
            category: category.to_owned(),
            brand: side_stats(&rows, brand),
            competitor: side_stats(&rows, competitor),
        })
        .collect()
}

fn side_stats(rows: &[&NormalizedRecord], brand: &str) -> SideStats {
    let own: Vec<&&NormalizedRecord> = rows.iter().filter(|r| r.is_brand(brand)).collect();
    SideStats {
        products: own.len(),
        mean_final_price: mean(own.iter().map(|r| r.final_price)),
        mean_discount_pct: mean(own.iter().map(|r| r.discount_pct)),
    }
}

fn empty_size(size: &str) -> SizeComparison {
    SizeComparison {
        size: size.to_owned(),
        brand: 0,
        competitor: 0,
    }
}

/// Canonical spelling from the data, or `brand` as given when absent.
fn display_name(rows: &[&NormalizedRecord], brand: &str) -> String {
    rows.iter()
        .find(|r| r.is_brand(brand))
        .map_or_else(|| brand.to_owned(), |r| r.brand_clean.clone())
}
