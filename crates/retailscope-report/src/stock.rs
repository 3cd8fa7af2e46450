//! Stock depth, size curves and discount outliers for one brand.

use std::collections::BTreeMap;

use retailscope_core::NormalizedRecord;
use retailscope_normalize::{clean_size_label, stock_summary, StockBucket};
use serde::Serialize;

use crate::stats::OTHER_CATEGORY;

/// Discount above which a listing counts as severely discounted.
pub const DEFAULT_SEVERE_DISCOUNT_PCT: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingStock {
    pub listing: String,
    pub name: String,
    pub in_stock: usize,
    pub total: usize,
    pub in_stock_pct: f64,
    pub bucket: StockBucket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub bucket: StockBucket,
    pub listings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReport {
    /// Best-stocked listings first.
    pub listings: Vec<ListingStock>,
    /// Every bucket, in [`StockBucket::ALL`] order, including empty ones.
    pub histogram: Vec<BucketCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeCount {
    pub size: String,
    pub available: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountedListing {
    pub listing: String,
    pub name: String,
    pub category: String,
    pub final_price: Option<f64>,
    pub discount_pct: f64,
}

/// Per-listing size availability for `brand`. Listings without size data
/// are left out.
#[must_use]
pub fn stock_report(records: &[NormalizedRecord], brand: &str) -> StockReport {
    let mut listings: Vec<ListingStock> = records
        .iter()
        .filter(|r| r.is_brand(brand))
        .filter_map(|r| {
            let summary = stock_summary(&r.sizes)?;
            Some(ListingStock {
                listing: listing_id(r),
                name: r.best_name.clone(),
                in_stock: summary.in_stock,
                total: summary.total,
                in_stock_pct: summary.in_stock_pct,
                bucket: summary.bucket(),
            })
        })
        .collect();

    listings.sort_by(|a, b| {
        b.in_stock_pct
            .total_cmp(&a.in_stock_pct)
            .then_with(|| a.listing.cmp(&b.listing))
    });

    let histogram = StockBucket::ALL
        .iter()
        .map(|&bucket| BucketCount {
            bucket,
            listings: listings.iter().filter(|l| l.bucket == bucket).count(),
        })
        .collect();

    StockReport {
        listings,
        histogram,
    }
}

/// Available size variants of `brand`, counted per cleaned size label and
/// ordered by label.
#[must_use]
pub fn size_curve(records: &[NormalizedRecord], brand: &str) -> Vec<SizeCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for size in records
        .iter()
        .filter(|r| r.is_brand(brand))
        .flat_map(|r| &r.sizes)
        .filter(|s| s.available)
    {
        *counts.entry(clean_size_label(&size.name)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(size, available)| SizeCount { size, available })
        .collect()
}

/// Listings of `brand` discounted by more than `threshold` percent, deepest
/// first.
#[must_use]
pub fn severe_discounts(
    records: &[NormalizedRecord],
    brand: &str,
    threshold: f64,
) -> Vec<DiscountedListing> {
    let mut hits: Vec<DiscountedListing> = records
        .iter()
        .filter(|r| r.is_brand(brand))
        .filter_map(|r| {
            let discount_pct = r.discount_pct.filter(|d| *d > threshold)?;
            Some(DiscountedListing {
                listing: listing_id(r),
                name: r.best_name.clone(),
                category: r
                    .category_clean
                    .map_or(OTHER_CATEGORY, |c| c.label())
                    .to_owned(),
                final_price: r.final_price,
                discount_pct,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.discount_pct.total_cmp(&a.discount_pct));
    hits
}

fn listing_id(record: &NormalizedRecord) -> String {
    record
        .source
        .listing_key()
        .unwrap_or(record.best_name.as_str())
        .to_owned()
}
