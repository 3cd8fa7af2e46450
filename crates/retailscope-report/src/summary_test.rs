use retailscope_core::MainCategory::{Bras, Nightwear, Underwear};

use super::*;
use crate::test_support::{listing, priced};

fn sample() -> Vec<NormalizedRecord> {
    vec![
        priced(listing("D1", "Dorina", Some(Bras)), 20.0, 50.0),
        priced(listing("D2", "Dorina", Some(Underwear)), 10.0, 0.0),
        listing("D3", "Dorina", None),
        priced(listing("S1", "Sloggi", Some(Underwear)), 15.0, 10.0),
        priced(listing("S2", "Sloggi", Some(Underwear)), 25.0, 30.0),
        listing("T1", "Triumph", Some(Nightwear)),
        listing("A1", "Aubade", Some(Bras)),
    ]
}

// -----------------------------------------------------------------------
// brand_summaries
// -----------------------------------------------------------------------

#[test]
fn summaries_sorted_by_count_then_name() {
    let brands: Vec<String> = brand_summaries(&sample())
        .into_iter()
        .map(|s| s.brand)
        .collect();
    assert_eq!(brands, vec!["Dorina", "Sloggi", "Aubade", "Triumph"]);
}

#[test]
fn summary_means_skip_missing_values() {
    let summaries = brand_summaries(&sample());
    let dorina = &summaries[0];
    assert_eq!(dorina.products, 3);
    assert_eq!(dorina.mean_final_price, Some(15.0));
    assert_eq!(dorina.mean_price_per_item, Some(15.0));
    assert_eq!(dorina.mean_discount_pct, Some(25.0));
    assert_eq!(dorina.categories, 2);
}

#[test]
fn summary_of_unpriced_brand_has_no_means() {
    let summaries = brand_summaries(&sample());
    let triumph = summaries.iter().find(|s| s.brand == "Triumph").unwrap();
    assert_eq!(triumph.mean_final_price, None);
    assert_eq!(triumph.mean_discount_pct, None);
}

#[test]
fn summaries_of_empty_input_are_empty() {
    assert!(brand_summaries(&[]).is_empty());
}

// -----------------------------------------------------------------------
// market_share
// -----------------------------------------------------------------------

#[test]
fn market_share_takes_top_n() {
    let shares = market_share(&sample(), 2, "Dorina");
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].brand, "Dorina");
    assert_eq!(shares[0].share_pct, 42.86);
    assert_eq!(shares[1].brand, "Sloggi");
}

#[test]
fn market_share_appends_focus_brand_outside_top_n() {
    let shares = market_share(&sample(), 1, "triumph");
    let brands: Vec<&str> = shares.iter().map(|s| s.brand.as_str()).collect();
    assert_eq!(brands, vec!["Dorina", "Triumph"]);
    assert_eq!(shares[1].products, 1);
}

#[test]
fn market_share_matches_non_ascii_focus_brand() {
    let mut records = sample();
    records.push(listing("H1", "Hunkemöller", Some(Bras)));
    let shares = market_share(&records, 1, "HUNKEMÖLLER");
    let brands: Vec<&str> = shares.iter().map(|s| s.brand.as_str()).collect();
    assert_eq!(brands, vec!["Dorina", "Hunkemöller"]);
}

#[test]
fn market_share_ignores_absent_focus_brand() {
    let shares = market_share(&sample(), 1, "Calvin Klein");
    assert_eq!(shares.len(), 1);
}

// -----------------------------------------------------------------------
// category_breakdown
// -----------------------------------------------------------------------

#[test]
fn breakdown_groups_unclassified_as_other() {
    let breakdown = category_breakdown(&sample(), "dorina");
    let categories: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, vec!["Bras", "Other", "Underwear"]);
    assert!(breakdown.iter().all(|c| c.products == 1));
}

#[test]
fn breakdown_means_per_category() {
    let breakdown = category_breakdown(&sample(), "Sloggi");
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "Underwear");
    assert_eq!(breakdown[0].products, 2);
    assert_eq!(breakdown[0].mean_final_price, Some(20.0));
    assert_eq!(breakdown[0].mean_discount_pct, Some(20.0));
}

#[test]
fn breakdown_for_unknown_brand_is_empty() {
    assert!(category_breakdown(&sample(), "Nobody").is_empty());
}
