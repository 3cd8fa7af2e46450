//! `report` command handler and plain-text rendering.

use std::io::{self, Write};
use std::path::PathBuf;

use retailscope_report::{
    build_report, BrandComparison, BrandReport, MarketPricing, ReportOptions, SegmentComparison,
    StockReport,
};

use crate::OutputFormat;

/// Listings shown per table in text output.
const TEXT_ROW_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub(crate) struct ReportArgs {
    pub input: PathBuf,
    pub brand: String,
    pub competitor: Option<String>,
    pub top_n: usize,
    pub severe_discount_pct: f64,
    pub format: OutputFormat,
}

/// Load and normalize the listings table, then print the focus-brand report.
///
/// # Errors
///
/// Returns an error if the table cannot be read, the report cannot be
/// serialized, or stdout cannot be written.
pub(crate) fn run_report(args: &ReportArgs) -> anyhow::Result<()> {
    let table = retailscope_normalize::read_products(&args.input)?;
    if table.is_empty() {
        println!("no listings in {}", args.input.display());
        return Ok(());
    }

    let normalized = retailscope_normalize::normalize_all(&table.records());
    let report = build_report(
        &normalized,
        &ReportOptions {
            focus_brand: &args.brand,
            competitor: args.competitor.as_deref(),
            top_n: args.top_n,
            severe_discount_pct: args.severe_discount_pct,
        },
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => write_text(&report, &mut io::stdout().lock())?,
    }
    Ok(())
}

fn fmt_money(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.2}"))
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.1}%"))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Write `report` as a plain-text document.
pub(crate) fn write_text<W: Write>(report: &BrandReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "# Brand Report: {}", report.focus_brand)?;
    writeln!(
        out,
        "{} listings across {} brands",
        report.total_products, report.total_brands
    )?;

    writeln!(out)?;
    writeln!(out, "## Focus brand")?;
    match &report.focus_summary {
        Some(s) => {
            writeln!(out, "Listings:            {}", s.products)?;
            writeln!(out, "Avg final price:     {}", fmt_money(s.mean_final_price))?;
            writeln!(out, "Avg price per item:  {}", fmt_money(s.mean_price_per_item))?;
            writeln!(out, "Avg discount:        {}", fmt_pct(s.mean_discount_pct))?;
            writeln!(out, "Main categories:     {}", s.categories)?;
        }
        None => writeln!(out, "no listings for {}", report.focus_brand)?,
    }

    writeln!(out)?;
    writeln!(out, "## Market share")?;
    writeln!(out, "{:<28}{:>10}{:>10}", "BRAND", "LISTINGS", "SHARE")?;
    for share in &report.market_share {
        writeln!(
            out,
            "{:<28}{:>10}{:>9.1}%",
            truncate(&share.brand, 24),
            share.products,
            share.share_pct
        )?;
    }

    write_market_pricing(&report.market_pricing, out)?;
    write_segments(
        "Brand vs. market",
        std::slice::from_ref(&report.market_comparison),
        out,
    )?;

    if !report.categories.is_empty() {
        writeln!(out)?;
        writeln!(out, "## Categories")?;
        writeln!(
            out,
            "{:<24}{:>10}{:>12}{:>12}",
            "CATEGORY", "LISTINGS", "AVG PRICE", "AVG DISC"
        )?;
        for c in &report.categories {
            writeln!(
                out,
                "{:<24}{:>10}{:>12}{:>12}",
                c.category,
                c.products,
                fmt_money(c.mean_final_price),
                fmt_pct(c.mean_discount_pct)
            )?;
        }
    }

    write_segments("Category deep dive", &report.category_deep_dive, out)?;
    write_segments("Subcategory deep dive", &report.subcategory_deep_dive, out)?;

    if let Some(cmp) = &report.competitor {
        write_competitor(cmp, out)?;
    }
    write_stock(&report.stock, out)?;

    if !report.size_curve.is_empty() {
        writeln!(out)?;
        writeln!(out, "## Size curve (available variants)")?;
        for s in &report.size_curve {
            writeln!(out, "{:<10}{:>6}", s.size, s.available)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Discounts above {:.0}%", report.severe_discount_pct)?;
    if report.severe_discounts.is_empty() {
        writeln!(out, "none")?;
    }
    for d in report.severe_discounts.iter().take(TEXT_ROW_LIMIT) {
        writeln!(
            out,
            "{:<20}{:<44}{:>10}{:>8.1}%",
            truncate(&d.listing, 18),
            truncate(&d.name, 40),
            fmt_money(d.final_price),
            d.discount_pct
        )?;
    }

    Ok(())
}

fn write_competitor<W: Write>(cmp: &BrandComparison, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "## {} vs. {}", cmp.brand, cmp.competitor)?;
    writeln!(
        out,
        "{:<24}{:>8}{:>8}{:>12}{:>12}{:>10}{:>10}",
        "CATEGORY", "COUNT", "COMP", "AVG PRICE", "COMP", "AVG DISC", "COMP"
    )?;
    for row in &cmp.by_category {
        writeln!(
            out,
            "{:<24}{:>8}{:>8}{:>12}{:>12}{:>10}{:>10}",
            row.category,
            row.brand.products,
            row.competitor.products,
            fmt_money(row.brand.mean_final_price),
            fmt_money(row.competitor.mean_final_price),
            fmt_pct(row.brand.mean_discount_pct),
            fmt_pct(row.competitor.mean_discount_pct)
        )?;
    }
    Ok(())
}

fn write_stock<W: Write>(stock: &StockReport, out: &mut W) -> io::Result<()> {
    if stock.listings.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "## Stock depth")?;
    let histogram: Vec<String> = stock
        .histogram
        .iter()
        .map(|b| format!("{} {}", b.bucket, b.listings))
        .collect();
    writeln!(out, "{}", histogram.join(" | "))?;
    writeln!(out, "{:<20}{:<44}{:>10}", "LISTING", "NAME", "IN STOCK")?;
    // Lowest availability is the actionable end of the list.
    for l in stock.listings.iter().rev().take(TEXT_ROW_LIMIT) {
        writeln!(
            out,
            "{:<20}{:<44}{:>4}/{:<3}{:>6.1}%",
            truncate(&l.listing, 18),
            truncate(&l.name, 40),
            l.in_stock,
            l.total,
            l.in_stock_pct
        )?;
    }
    Ok(())
}

fn write_market_pricing<W: Write>(pricing: &MarketPricing, out: &mut W) -> io::Result<()> {
    let sections = [
        ("Market pricing by category", &pricing.by_category),
        ("Highest-priced subcategories", &pricing.by_specific_category),
        ("Deepest-discounting brands", &pricing.by_brand),
    ];
    for (title, groups) in sections {
        if groups.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "## {title}")?;
        writeln!(
            out,
            "{:<28}{:>10}{:>12}{:>12}",
            "GROUP", "LISTINGS", "ASP", "AVG DISC"
        )?;
        for g in groups.iter().take(TEXT_ROW_LIMIT) {
            writeln!(
                out,
                "{:<28}{:>10}{:>12}{:>12}",
                truncate(&g.group, 24),
                g.products,
                fmt_money(g.mean_final_price),
                fmt_pct(g.mean_discount_pct)
            )?;
        }
    }
    Ok(())
}

fn write_segments<W: Write>(
    title: &str,
    segments: &[SegmentComparison],
    out: &mut W,
) -> io::Result<()> {
    if segments.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "## {title}")?;
    writeln!(
        out,
        "{:<24}{:>12}{:>12}{:>12}{:>12}{:>10}{:>10}",
        "SEGMENT", "LISTINGS", "AVG PRICE", "MARKET", "AVG DISC", "IN STOCK", "MARKET"
    )?;
    for c in segments {
        writeln!(
            out,
            "{:<24}{:>12}{:>12}{:>12}{:>12}{:>9.1}%{:>9.1}%",
            truncate(&c.segment, 20),
            format!("{}/{}", c.brand.products, c.market.products),
            fmt_money(c.brand.mean_final_price),
            fmt_money(c.market.mean_final_price),
            fmt_pct(c.brand.mean_discount_pct),
            c.brand.in_stock_pct,
            c.market.in_stock_pct
        )?;
        let bands: Vec<String> = c
            .price_bands
            .iter()
            .map(|b| format!("{} {:.0}%/{:.0}%", b.band, b.brand_pct, b.segment_pct))
            .collect();
        writeln!(out, "  price bands (brand/market): {}", bands.join(" | "))?;
        let colors: Vec<String> = c
            .colors
            .iter()
            .take(5)
            .map(|m| format!("{} {}/{}", m.color, m.brand, m.segment))
            .collect();
        writeln!(out, "  colors (brand/market): {}", colors.join(" | "))?;
    }
    Ok(())
}
