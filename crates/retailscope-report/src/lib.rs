//! Aggregations over normalized listings.
//!
//! Everything here is a pure function of `&[NormalizedRecord]`. Means skip
//! missing values and are `None` when no value is present.

pub mod comparison;
pub mod pricing;
pub mod report;
pub mod segment;
pub mod stats;
pub mod stock;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use comparison::{
    brand_comparison, default_competitor, BrandComparison, CategoryComparison, SideStats,
    SizeComparison,
};
pub use pricing::{market_pricing, DiscountCell, GroupPricing, MarketPricing, PRICING_TOP_N};
pub use report::{build_report, BrandReport, ReportOptions};
pub use segment::{
    compare_segment, listed_in_stock, market_comparison, segment_comparisons, BandShare,
    BrandPrice, ColorCount, PriceBand, Segment, SegmentComparison, SegmentSide,
};
pub use stats::OTHER_CATEGORY;
pub use stock::{
    severe_discounts, size_curve, stock_report, BucketCount, DiscountedListing, ListingStock,
    SizeCount, StockReport, DEFAULT_SEVERE_DISCOUNT_PCT,
};
pub use summary::{
    brand_summaries, category_breakdown, market_share, BrandSummary, CategoryBreakdown,
    MarketShare,
};
