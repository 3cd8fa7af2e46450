//! Market-wide selling prices and discounts.

use retailscope_core::NormalizedRecord;
use serde::Serialize;

use crate::stats::{desc_nulls_last, group_by, mean};

/// Rows kept in the specific-category and brand rankings.
pub const PRICING_TOP_N: usize = 20;

/// Average selling price and discount of one group of listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupPricing {
    pub group: String,
    pub products: usize,
    pub mean_final_price: Option<f64>,
    pub mean_discount_pct: Option<f64>,
}

/// Mean discount of one brand within one main category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountCell {
    pub category: String,
    pub brand: String,
    pub mean_discount_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPricing {
    /// Every main category, highest average price first.
    pub by_category: Vec<GroupPricing>,
    /// The `top_n` specific categories by average price.
    pub by_specific_category: Vec<GroupPricing>,
    /// The `top_n` brands by average discount.
    pub by_brand: Vec<GroupPricing>,
    /// Category x brand mean discount, for pairs with any priced discount.
    pub discount_matrix: Vec<DiscountCell>,
}

/// Price and discount aggregates across the whole market. Listings without
/// a category are left out of the category groupings.
#[must_use]
pub fn market_pricing(records: &[NormalizedRecord], top_n: usize) -> MarketPricing {
    let mut by_category = pricing_groups(group_by(records, |r| {
        r.category_clean.map(|c| c.label())
    }));
    by_category.sort_by(|a, b| desc_nulls_last(a.mean_final_price, b.mean_final_price));

    let mut by_specific_category =
        pricing_groups(group_by(records, |r| r.specific_category.as_deref()));
    by_specific_category.sort_by(|a, b| desc_nulls_last(a.mean_final_price, b.mean_final_price));
    by_specific_category.truncate(top_n);

    let mut by_brand = pricing_groups(group_by(records, |r| Some(r.brand_clean.as_str())));
    by_brand.sort_by(|a, b| desc_nulls_last(a.mean_discount_pct, b.mean_discount_pct));
    by_brand.truncate(top_n);

    let discount_matrix = group_by(records, |r| {
        r.category_clean.map(|c| (c.label(), r.brand_clean.as_str()))
    })
    .into_iter()
    .filter_map(|((category, brand), rows)| {
        Some(DiscountCell {
            category: category.to_owned(),
            brand: brand.to_owned(),
            mean_discount_pct: mean(rows.iter().map(|r| r.discount_pct))?,
        })
    })
    .collect();

    MarketPricing {
        by_category,
        by_specific_category,
        by_brand,
        discount_matrix,
    }
}

// Sorts are stable, so ties keep the key order of the map.
fn pricing_groups<'a, K: AsRef<str>>(
    groups: impl IntoIterator<Item = (K, Vec<&'a NormalizedRecord>)>,
) -> Vec<GroupPricing> {
    groups
        .into_iter()
        .map(|(group, rows)| GroupPricing {
            group: group.as_ref().to_owned(),
            products: rows.len(),
            mean_final_price: mean(rows.iter().map(|r| r.final_price)),
            mean_discount_pct: mean(rows.iter().map(|r| r.discount_pct)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use retailscope_core::MainCategory::{Bras, Underwear};

    use super::*;
    use crate::test_support::{listing, priced, with_specific};

    fn sample() -> Vec<NormalizedRecord> {
        vec![
            with_specific(priced(listing("D1", "Dorina", Some(Bras)), 30.0, 40.0), "Push-up Bra"),
            with_specific(priced(listing("D2", "Dorina", Some(Bras)), 20.0, 0.0), "Bralette"),
            with_specific(priced(listing("S1", "Sloggi", Some(Underwear)), 10.0, 10.0), "Brief"),
            with_specific(priced(listing("S2", "Sloggi", Some(Bras)), 40.0, 20.0), "Push-up Bra"),
            listing("X1", "Sloggi", None),
            listing("T1", "Triumph", Some(Underwear)),
        ]
    }

    #[test]
    fn categories_ranked_by_average_price() {
        let pricing = market_pricing(&sample(), PRICING_TOP_N);
        let rows: Vec<(&str, usize, Option<f64>)> = pricing
            .by_category
            .iter()
            .map(|g| (g.group.as_str(), g.products, g.mean_final_price))
            .collect();
        assert_eq!(rows, vec![("Bras", 3, Some(30.0)), ("Underwear", 2, Some(10.0))]);
    }

    #[test]
    fn specific_categories_ranked_and_truncated() {
        let pricing = market_pricing(&sample(), 2);
        let groups: Vec<&str> = pricing
            .by_specific_category
            .iter()
            .map(|g| g.group.as_str())
            .collect();
        assert_eq!(groups, vec!["Push-up Bra", "Bralette"]);
        assert_eq!(pricing.by_specific_category[0].mean_final_price, Some(35.0));
        assert_eq!(pricing.by_specific_category[0].mean_discount_pct, Some(30.0));
    }

    #[test]
    fn brands_ranked_by_discount_with_unpriced_last() {
        let pricing = market_pricing(&sample(), PRICING_TOP_N);
        let brands: Vec<(&str, Option<f64>)> = pricing
            .by_brand
            .iter()
            .map(|g| (g.group.as_str(), g.mean_discount_pct))
            .collect();
        assert_eq!(
            brands,
            vec![("Dorina", Some(20.0)), ("Sloggi", Some(15.0)), ("Triumph", None)]
        );
    }

    #[test]
    fn discount_matrix_skips_pairs_without_discounts() {
        let pricing = market_pricing(&sample(), PRICING_TOP_N);
        let cells: Vec<(&str, &str, f64)> = pricing
            .discount_matrix
            .iter()
            .map(|c| (c.category.as_str(), c.brand.as_str(), c.mean_discount_pct))
            .collect();
        assert_eq!(
            cells,
            vec![
                ("Bras", "Dorina", 20.0),
                ("Bras", "Sloggi", 20.0),
                ("Underwear", "Sloggi", 10.0),
            ]
        );
    }

    #[test]
    fn empty_market_has_empty_rankings() {
        let pricing = market_pricing(&[], PRICING_TOP_N);
        assert!(pricing.by_category.is_empty());
        assert!(pricing.by_brand.is_empty());
        assert!(pricing.discount_matrix.is_empty());
    }
}
