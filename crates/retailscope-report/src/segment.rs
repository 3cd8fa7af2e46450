//! Focus brand against a market segment: a main category, a specific
//! category, or the whole market.

use std::collections::BTreeMap;
use std::fmt;

use retailscope_core::{same_brand, NormalizedRecord};
use retailscope_normalize::price::parse_price;
use serde::Serialize;

use crate::stats::{group_by, mean, mean_positive, percentage};

/// Brands listed per segment, before the focus brand is appended.
pub const SEGMENT_TOP_BRANDS: usize = 10;
/// Colors listed per segment.
pub const SEGMENT_TOP_COLORS: usize = 10;

/// Label of the segment covering every listing.
pub const ALL_SEGMENT: &str = "All";

/// How listings are split into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Category,
    SpecificCategory,
}

impl Segment {
    fn key(self, record: &NormalizedRecord) -> Option<&str> {
        match self {
            Segment::Category => record.category_clean.map(|c| c.label()),
            Segment::SpecificCategory => record.specific_category.as_deref(),
        }
    }
}

/// Final-price band; lower bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PriceBand {
    #[serde(rename = "<20")]
    Under20,
    #[serde(rename = "20-30")]
    From20,
    #[serde(rename = "30-40")]
    From30,
    #[serde(rename = "40-50")]
    From40,
    #[serde(rename = "50-60")]
    From50,
    #[serde(rename = "60+")]
    From60,
}

impl PriceBand {
    pub const ALL: [PriceBand; 6] = [
        PriceBand::Under20,
        PriceBand::From20,
        PriceBand::From30,
        PriceBand::From40,
        PriceBand::From50,
        PriceBand::From60,
    ];

    /// `None` for negative or non-finite prices.
    #[must_use]
    pub fn from_price(price: f64) -> Option<Self> {
        if !price.is_finite() || price < 0.0 {
            return None;
        }
        Some(if price < 20.0 {
            PriceBand::Under20
        } else if price < 30.0 {
            PriceBand::From20
        } else if price < 40.0 {
            PriceBand::From30
        } else if price < 50.0 {
            PriceBand::From40
        } else if price < 60.0 {
            PriceBand::From50
        } else {
            PriceBand::From60
        })
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PriceBand::Under20 => "<20",
            PriceBand::From20 => "20-30",
            PriceBand::From30 => "30-40",
            PriceBand::From40 => "40-50",
            PriceBand::From50 => "50-60",
            PriceBand::From60 => "60+",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline figures for one side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSide {
    pub products: usize,
    pub brands: usize,
    pub mean_final_price: Option<f64>,
    /// Share of listings with a positive discount.
    pub discounted_pct: f64,
    /// Mean over discounted listings only.
    pub mean_discount_pct: Option<f64>,
    /// Share of listings whose `in_stock` cell is positive or `true`.
    pub in_stock_pct: f64,
    pub top_color: Option<String>,
    pub top_brand: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandPrice {
    pub brand: String,
    pub products: usize,
    pub mean_final_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    pub color: String,
    pub brand: usize,
    pub segment: usize,
}

/// Share of priced listings in one band, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandShare {
    pub band: PriceBand,
    pub brand_pct: f64,
    pub segment_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentComparison {
    pub segment: String,
    pub brand: SegmentSide,
    pub market: SegmentSide,
    /// Largest brands of the segment; the focus brand is appended when it
    /// falls outside them.
    pub brands: Vec<BrandPrice>,
    /// Most common colors of the segment with the focus brand's count.
    pub colors: Vec<ColorCount>,
    /// Every band, in [`PriceBand::ALL`] order.
    pub price_bands: Vec<BandShare>,
}

/// Compares `brand` with all listings of `segment_label`.
#[must_use]
pub fn compare_segment(
    segment_label: &str,
    rows: &[&NormalizedRecord],
    brand: &str,
) -> SegmentComparison {
    let brand_rows: Vec<&NormalizedRecord> =
        rows.iter().copied().filter(|r| r.is_brand(brand)).collect();

    SegmentComparison {
        segment: segment_label.to_owned(),
        brand: side(&brand_rows),
        market: side(rows),
        brands: segment_brands(rows, brand),
        colors: color_mix(&brand_rows, rows),
        price_bands: price_band_mix(&brand_rows, rows),
    }
}

/// One comparison per segment the brand is listed in, the brand's largest
/// segments first.
#[must_use]
pub fn segment_comparisons(
    records: &[NormalizedRecord],
    brand: &str,
    segment: Segment,
) -> Vec<SegmentComparison> {
    let groups = group_by(records, |r| segment.key(r));
    let mut carried: Vec<(usize, SegmentComparison)> = groups
        .into_iter()
        .filter_map(|(label, rows)| {
            let listed = rows.iter().filter(|r| r.is_brand(brand)).count();
            (listed > 0).then(|| (listed, compare_segment(label, &rows, brand)))
        })
        .collect();
    carried.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.segment.cmp(&b.1.segment)));
    carried.into_iter().map(|(_, c)| c).collect()
}

/// `brand` against every listing.
#[must_use]
pub fn market_comparison(records: &[NormalizedRecord], brand: &str) -> SegmentComparison {
    let rows: Vec<&NormalizedRecord> = records.iter().collect();
    compare_segment(ALL_SEGMENT, &rows, brand)
}

/// `true` when the raw `in_stock` cell is a positive number or `true`.
#[must_use]
pub fn listed_in_stock(record: &NormalizedRecord) -> bool {
    match record.source.in_stock.as_deref().map(str::trim) {
        Some(flag) if flag.eq_ignore_ascii_case("true") => true,
        cell => parse_price(cell).is_some_and(|n| n > 0.0),
    }
}

fn side(rows: &[&NormalizedRecord]) -> SegmentSide {
    let total = rows.len();
    let discounted = rows
        .iter()
        .filter(|r| r.discount_pct.is_some_and(|d| d > 0.0))
        .count();
    let in_stock = rows.iter().filter(|r| listed_in_stock(r)).count();
    let brand_counts = counts(rows.iter().map(|r| r.brand_clean.as_str()));

    SegmentSide {
        products: total,
        brands: brand_counts.len(),
        mean_final_price: mean(rows.iter().map(|r| r.final_price)),
        discounted_pct: percentage(discounted, total),
        mean_discount_pct: mean_positive(rows.iter().map(|r| r.discount_pct)),
        in_stock_pct: percentage(in_stock, total),
        top_color: mode(&counts(rows.iter().map(|r| r.color_clean.as_str()))),
        top_brand: mode(&brand_counts),
    }
}

fn segment_brands(rows: &[&NormalizedRecord], focus: &str) -> Vec<BrandPrice> {
    let mut all: Vec<BrandPrice> = group_by(rows.iter().copied(), |r| Some(r.brand_clean.as_str()))
        .into_iter()
        .map(|(brand, rows)| BrandPrice {
            brand: brand.to_owned(),
            products: rows.len(),
            mean_final_price: mean(rows.iter().map(|r| r.final_price)),
        })
        .collect();
    all.sort_by(|a, b| b.products.cmp(&a.products).then_with(|| a.brand.cmp(&b.brand)));

    let focus_at = all.iter().position(|b| same_brand(&b.brand, focus));
    let mut top: Vec<BrandPrice> = all.iter().take(SEGMENT_TOP_BRANDS).cloned().collect();
    if let Some(i) = focus_at.filter(|i| *i >= SEGMENT_TOP_BRANDS) {
        top.push(all[i].clone());
    }
    top
}

fn color_mix(brand_rows: &[&NormalizedRecord], rows: &[&NormalizedRecord]) -> Vec<ColorCount> {
    let brand_counts = counts(brand_rows.iter().map(|r| r.color_clean.as_str()));
    ranked(&counts(rows.iter().map(|r| r.color_clean.as_str())))
        .into_iter()
        .take(SEGMENT_TOP_COLORS)
        .map(|(color, segment)| ColorCount {
            color: color.to_owned(),
            brand: brand_counts.get(color).copied().unwrap_or_default(),
            segment,
        })
        .collect()
}

fn price_band_mix(brand_rows: &[&NormalizedRecord], rows: &[&NormalizedRecord]) -> Vec<BandShare> {
    let bands = |rows: &[&NormalizedRecord]| -> Vec<PriceBand> {
        rows.iter()
            .filter_map(|r| r.final_price.and_then(PriceBand::from_price))
            .collect()
    };
    let (brand_bands, segment_bands) = (bands(brand_rows), bands(rows));
    let share = |bands: &[PriceBand], band: PriceBand| {
        percentage(bands.iter().filter(|b| **b == band).count(), bands.len())
    };

    PriceBand::ALL
        .iter()
        .map(|&band| BandShare {
            band,
            brand_pct: share(&brand_bands, band),
            segment_pct: share(&segment_bands, band),
        })
        .collect()
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
}

/// Most frequent first, ties by value.
fn ranked<'a>(counts: &BTreeMap<&'a str, usize>) -> Vec<(&'a str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (*k, *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

fn mode(counts: &BTreeMap<&str, usize>) -> Option<String> {
    ranked(counts).first().map(|(value, _)| (*value).to_owned())
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod tests;
