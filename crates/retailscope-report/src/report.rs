use retailscope_core::{same_brand, NormalizedRecord};
use serde::Serialize;

use crate::comparison::{brand_comparison, default_competitor, BrandComparison};
use crate::pricing::{market_pricing, MarketPricing, PRICING_TOP_N};
use crate::segment::{market_comparison, segment_comparisons, Segment, SegmentComparison};
use crate::stock::{
    severe_discounts, size_curve, stock_report, DiscountedListing, SizeCount, StockReport,
};
use crate::summary::{
    brand_summaries, category_breakdown, market_share, BrandSummary, CategoryBreakdown,
    MarketShare,
};

/// Parameters for [`build_report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions<'a> {
    pub focus_brand: &'a str,
    /// Brand to compare against; the largest other brand when `None`.
    pub competitor: Option<&'a str>,
    pub top_n: usize,
    pub severe_discount_pct: f64,
}

/// Market overview plus a deep dive into one focus brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandReport {
    pub focus_brand: String,
    pub total_products: usize,
    pub total_brands: usize,
    /// `None` when the focus brand has no listings.
    pub focus_summary: Option<BrandSummary>,
    pub market_share: Vec<MarketShare>,
    pub market_pricing: MarketPricing,
    pub market_comparison: SegmentComparison,
    pub categories: Vec<CategoryBreakdown>,
    pub category_deep_dive: Vec<SegmentComparison>,
    pub subcategory_deep_dive: Vec<SegmentComparison>,
    /// `None` when the market has no brand besides the focus brand.
    pub competitor: Option<BrandComparison>,
    pub stock: StockReport,
    pub size_curve: Vec<SizeCount>,
    pub severe_discount_pct: f64,
    pub severe_discounts: Vec<DiscountedListing>,
}

#[must_use]
pub fn build_report(records: &[NormalizedRecord], options: &ReportOptions<'_>) -> BrandReport {
    let focus = options.focus_brand;
    let summaries = brand_summaries(records);
    let focus_summary = summaries
        .iter()
        .find(|s| same_brand(&s.brand, focus))
        .cloned();

    if focus_summary.is_none() {
        tracing::warn!(focus_brand = focus, "focus brand has no listings");
    }

    let competitor = options
        .competitor
        .map(str::to_owned)
        .or_else(|| default_competitor(records, focus))
        .map(|competitor| brand_comparison(records, focus, &competitor));

    let report = BrandReport {
        focus_brand: focus_summary
            .as_ref()
            .map_or_else(|| focus.to_owned(), |s| s.brand.clone()),
        total_products: records.len(),
        total_brands: summaries.len(),
        market_share: market_share(records, options.top_n, focus),
        market_pricing: market_pricing(records, PRICING_TOP_N),
        market_comparison: market_comparison(records, focus),
        categories: category_breakdown(records, focus),
        category_deep_dive: segment_comparisons(records, focus, Segment::Category),
        subcategory_deep_dive: segment_comparisons(records, focus, Segment::SpecificCategory),
        competitor,
        stock: stock_report(records, focus),
        size_curve: size_curve(records, focus),
        severe_discount_pct: options.severe_discount_pct,
        severe_discounts: severe_discounts(records, focus, options.severe_discount_pct),
        focus_summary,
    };

    tracing::debug!(
        focus_brand = %report.focus_brand,
        products = report.total_products,
        brands = report.total_brands,
        competitor = report.competitor.as_ref().map(|c| c.competitor.as_str()),
        "built brand report"
    );
    report
}

#[cfg(test)]
mod tests {
    use retailscope_core::MainCategory;

    use super::*;
    use crate::test_support::{listing, priced, with_sizes, with_specific};

    fn options(focus_brand: &str) -> ReportOptions<'_> {
        ReportOptions {
            focus_brand,
            competitor: None,
            top_n: 1,
            severe_discount_pct: 50.0,
        }
    }

    fn records() -> Vec<NormalizedRecord> {
        vec![
            priced(listing("S1", "Sloggi", Some(MainCategory::Underwear)), 10.0, 0.0),
            priced(listing("S2", "Sloggi", Some(MainCategory::Underwear)), 12.0, 10.0),
            with_sizes(
                with_specific(
                    priced(listing("D1", "Dorina", Some(MainCategory::Bras)), 9.0, 70.0),
                    "Push-up Bra",
                ),
                &[("75B", true), ("80B", false)],
            ),
        ]
    }

    #[test]
    fn report_covers_focus_brand() {
        let report = build_report(&records(), &options("DORINA"));
        assert_eq!(report.focus_brand, "Dorina");
        assert_eq!(report.total_products, 3);
        assert_eq!(report.total_brands, 2);

        let summary = report.focus_summary.as_ref().unwrap();
        assert_eq!(summary.products, 1);

        let share_brands: Vec<&str> = report
            .market_share
            .iter()
            .map(|s| s.brand.as_str())
            .collect();
        assert_eq!(share_brands, vec!["Sloggi", "Dorina"]);

        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.stock.listings.len(), 1);
        assert_eq!(report.size_curve.len(), 1);
        assert_eq!(report.severe_discounts.len(), 1);
    }

    #[test]
    fn report_includes_market_and_deep_dive_sections() {
        let report = build_report(&records(), &options("Dorina"));
        let priced_categories: Vec<&str> = report
            .market_pricing
            .by_category
            .iter()
            .map(|g| g.group.as_str())
            .collect();
        assert_eq!(priced_categories, vec!["Underwear", "Bras"]);
        assert_eq!(report.market_comparison.market.products, 3);
        assert_eq!(report.market_comparison.brand.products, 1);
        assert_eq!(report.category_deep_dive.len(), 1);
        assert_eq!(report.category_deep_dive[0].segment, "Bras");
        assert_eq!(report.subcategory_deep_dive[0].segment, "Push-up Bra");

        let competitor = report.competitor.as_ref().unwrap();
        assert_eq!(competitor.competitor, "Sloggi");
        assert_eq!(competitor.by_category.len(), 2);
    }

    #[test]
    fn explicit_competitor_overrides_default() {
        let options = ReportOptions {
            competitor: Some("triumph"),
            ..options("Dorina")
        };
        let report = build_report(&records(), &options);
        assert_eq!(report.competitor.unwrap().competitor, "triumph");
    }

    #[test]
    fn single_brand_market_has_no_competitor() {
        let records = vec![listing("D1", "Dorina", None)];
        assert!(build_report(&records, &options("Dorina")).competitor.is_none());
    }

    #[test]
    fn report_for_absent_brand_is_empty_but_valid() {
        let report = build_report(&records(), &options("Aubade"));
        assert_eq!(report.focus_brand, "Aubade");
        assert!(report.focus_summary.is_none());
        assert!(report.categories.is_empty());
        assert!(report.stock.listings.is_empty());
        assert_eq!(report.market_share.len(), 1);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = build_report(&records(), &options("Dorina"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["focus_brand"], "Dorina");
        assert_eq!(json["categories"][0]["category"], "Bras");
        assert_eq!(json["stock"]["histogram"][4]["bucket"], "<70%");
        assert_eq!(json["stock"]["histogram"][4]["listings"], 1);
    }
}
