use retailscope_core::{MainCategory, NormalizedRecord, ProductRecord, SizeEntry};

/// Minimal normalized listing for aggregation tests.
pub(crate) fn listing(sku: &str, brand: &str, category: Option<MainCategory>) -> NormalizedRecord {
    NormalizedRecord {
        source: ProductRecord {
            sku: Some(sku.to_string()),
            ..ProductRecord::default()
        },
        brand_clean: brand.to_string(),
        best_name: format!("{brand} {sku}"),
        category_clean: category,
        specific_category: None,
        color_clean: "Black".to_string(),
        initial_price: None,
        final_price: None,
        discount_pct: None,
        pack_size: 1,
        price_per_item: None,
        sizes: vec![],
    }
}

pub(crate) fn priced(mut record: NormalizedRecord, final_price: f64, discount: f64) -> NormalizedRecord {
    record.final_price = Some(final_price);
    record.price_per_item = Some(final_price / f64::from(record.pack_size));
    record.discount_pct = Some(discount);
    record
}

pub(crate) fn with_sizes(mut record: NormalizedRecord, sizes: &[(&str, bool)]) -> NormalizedRecord {
    record.sizes = sizes
        .iter()
        .map(|(name, available)| SizeEntry {
            name: (*name).to_string(),
            available: *available,
        })
        .collect();
    record
}

pub(crate) fn with_specific(mut record: NormalizedRecord, specific: &str) -> NormalizedRecord {
    record.specific_category = Some(specific.to_string());
    record
}

pub(crate) fn with_color(mut record: NormalizedRecord, color: &str) -> NormalizedRecord {
    record.color_clean = color.to_string();
    record
}

pub(crate) fn with_stock_flag(mut record: NormalizedRecord, in_stock: &str) -> NormalizedRecord {
    record.source.in_stock = Some(in_stock.to_string());
    record
}
