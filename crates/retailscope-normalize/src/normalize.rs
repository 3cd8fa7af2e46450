use retailscope_core::{NormalizedRecord, ProductRecord};

use crate::category::classify_with_fallback;
use crate::color::normalize_color;
use crate::price::derive_pricing;
use crate::sizes::parse_sizes;
use crate::text::{best_name, clean_brand};

/// Derives every normalized field for one scraped listing.
///
/// Total: malformed cells degrade to sentinels or `None`, never to an error.
#[must_use]
pub fn normalize_record(record: &ProductRecord) -> NormalizedRecord {
    let brand_clean =
        clean_brand(cell(record.brand.as_deref()).or(cell(record.brand_name.as_deref())));
    let best_name = best_name(
        cell(record.product_name.as_deref()),
        cell(record.name.as_deref()),
    );
    let classification =
        classify_with_fallback(cell(record.discovery_input.as_deref()), &best_name);
    let color_clean =
        normalize_color(cell(record.color.as_deref()).or(cell(record.colors.as_deref())));
    let pricing = derive_pricing(
        cell(record.initial_price.as_deref()),
        cell(record.final_price.as_deref()),
        &best_name,
    );

    NormalizedRecord {
        source: record.clone(),
        brand_clean,
        best_name,
        category_clean: classification.main,
        specific_category: classification.specific.map(str::to_owned),
        color_clean,
        initial_price: pricing.initial_price,
        final_price: pricing.final_price,
        discount_pct: pricing.discount_pct,
        pack_size: pricing.pack_size,
        price_per_item: pricing.price_per_item,
        sizes: parse_sizes(cell(record.sizes.as_deref())),
    }
}

/// Normalizes a batch, preserving input order.
#[must_use]
pub fn normalize_all(records: &[ProductRecord]) -> Vec<NormalizedRecord> {
    let normalized: Vec<NormalizedRecord> = records.iter().map(normalize_record).collect();

    let unclassified = normalized
        .iter()
        .filter(|r| r.category_clean.is_none())
        .count();
    tracing::debug!(
        records = normalized.len(),
        unclassified,
        "normalized product records"
    );

    normalized
}

fn cell(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
