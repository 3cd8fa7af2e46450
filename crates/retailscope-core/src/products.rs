use serde::{Deserialize, Serialize};

/// Sentinel used for brand, name and color values that could not be recovered.
pub const UNKNOWN: &str = "Unknown";

/// Columns appended by normalization, in output order.
///
/// Input tables that already carry these columns have them replaced rather
/// than duplicated, so normalizing an enriched table is idempotent.
pub const DERIVED_COLUMNS: [&str; 8] = [
    "brand_clean",
    "best_name",
    "category_clean",
    "specific_category",
    "color_clean",
    "discount_pct",
    "pack_size",
    "price_per_item",
];

/// One scraped listing, exactly as the scraper exported it.
///
/// Every field is optional: an empty CSV cell and a missing column are both
/// represented as `None`. Prices stay as text here because the source mixes
/// numbers, blanks and the occasional stray string; coercion happens during
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub brand_name: Option<String>,
    /// Category indicator: a URL, a slash-delimited path, a slug, or a JSON
    /// object carrying a `url` key.
    pub discovery_input: Option<String>,
    pub color: Option<String>,
    pub colors: Option<String>,
    pub initial_price: Option<String>,
    pub final_price: Option<String>,
    pub in_stock: Option<String>,
    pub main_image: Option<String>,
    /// JSON-encoded array of `{"name": ..., "availability": ...}` objects.
    pub sizes: Option<String>,
    pub sku: Option<String>,
    pub product_url: Option<String>,
}

impl ProductRecord {
    /// Identifier used when listing individual products in reports: `sku`,
    /// then `product_url`, then `None`. Blank values are skipped.
    #[must_use]
    pub fn listing_key(&self) -> Option<&str> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|s| !s.trim().is_empty())
        }
        present(&self.sku).or_else(|| present(&self.product_url))
    }
}

/// Closed set of main categories a listing can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainCategory {
    Bras,
    Underwear,
    #[serde(rename = "Bodysuits & Corsetry")]
    BodysuitsCorsetry,
    Shapewear,
    #[serde(rename = "Lingerie Sets")]
    LingerieSets,
    Nightwear,
    Tops,
    Hosiery,
    Swimwear,
    #[serde(rename = "Sports Bras")]
    SportsBras,
    Accessories,
    Bottoms,
}

impl MainCategory {
    pub const ALL: [MainCategory; 12] = [
        MainCategory::Bras,
        MainCategory::Underwear,
        MainCategory::BodysuitsCorsetry,
        MainCategory::Shapewear,
        MainCategory::LingerieSets,
        MainCategory::Nightwear,
        MainCategory::Tops,
        MainCategory::Hosiery,
        MainCategory::Swimwear,
        MainCategory::SportsBras,
        MainCategory::Accessories,
        MainCategory::Bottoms,
    ];

    /// Display label, as written to the `category_clean` column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MainCategory::Bras => "Bras",
            MainCategory::Underwear => "Underwear",
            MainCategory::BodysuitsCorsetry => "Bodysuits & Corsetry",
            MainCategory::Shapewear => "Shapewear",
            MainCategory::LingerieSets => "Lingerie Sets",
            MainCategory::Nightwear => "Nightwear",
            MainCategory::Tops => "Tops",
            MainCategory::Hosiery => "Hosiery",
            MainCategory::Swimwear => "Swimwear",
            MainCategory::SportsBras => "Sports Bras",
            MainCategory::Accessories => "Accessories",
            MainCategory::Bottoms => "Bottoms",
        }
    }
}

impl std::fmt::Display for MainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single size option decoded from the `sizes` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub name: String,
    pub available: bool,
}

/// Brand names compared by their Unicode lowercase forms.
#[must_use]
pub fn same_brand(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// A [`ProductRecord`] plus every field derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub source: ProductRecord,
    /// Title-cased canonical brand, or [`UNKNOWN`].
    pub brand_clean: String,
    pub best_name: String,
    pub category_clean: Option<MainCategory>,
    pub specific_category: Option<String>,
    pub color_clean: String,
    pub initial_price: Option<f64>,
    pub final_price: Option<f64>,
    /// Percentage off the initial price, rounded to two decimals.
    pub discount_pct: Option<f64>,
    /// Units per listing; always at least 1.
    pub pack_size: u32,
    pub price_per_item: Option<f64>,
    pub sizes: Vec<SizeEntry>,
}

impl NormalizedRecord {
    /// `true` when the brand matches `brand` case-insensitively.
    #[must_use]
    pub fn is_brand(&self, brand: &str) -> bool {
        same_brand(&self.brand_clean, brand)
    }

    /// Derived column values in [`DERIVED_COLUMNS`] order. Absent values
    /// become empty cells.
    #[must_use]
    pub fn derived_cells(&self) -> [String; 8] {
        [
            self.brand_clean.clone(),
            self.best_name.clone(),
            self.category_clean
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            self.specific_category.clone().unwrap_or_default(),
            self.color_clean.clone(),
            self.discount_pct.map(|v| v.to_string()).unwrap_or_default(),
            self.pack_size.to_string(),
            self.price_per_item
                .map(|v| v.to_string())
                .unwrap_or_default(),
        ]
    }
}
