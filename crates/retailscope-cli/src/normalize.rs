//! `normalize` command handler.

use std::path::Path;

/// Counts reported after a normalize run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NormalizeOutcome {
    pub listings: usize,
    pub unclassified: usize,
    pub unpriced: usize,
}

/// Read `input`, derive every normalized column, and write the enriched
/// table to `output`.
///
/// # Errors
///
/// Returns an error if the input cannot be read as CSV or the output cannot
/// be written. Malformed individual cells never fail the run.
pub(crate) fn normalize_file(input: &Path, output: &Path) -> anyhow::Result<NormalizeOutcome> {
    let table = retailscope_normalize::read_products(input)?;
    let normalized = retailscope_normalize::normalize_all(&table.records());
    retailscope_normalize::write_normalized(output, &table, &normalized)?;

    Ok(NormalizeOutcome {
        listings: normalized.len(),
        unclassified: normalized
            .iter()
            .filter(|r| r.category_clean.is_none())
            .count(),
        unpriced: normalized
            .iter()
            .filter(|r| r.final_price.is_none())
            .count(),
    })
}

pub(crate) fn run_normalize(input: &Path, output: &Path) -> anyhow::Result<()> {
    let outcome = normalize_file(input, output)?;

    if outcome.unclassified > 0 {
        tracing::warn!(
            unclassified = outcome.unclassified,
            "some listings matched no category keyword"
        );
    }

    println!(
        "normalized {} listings: {} -> {} ({} unclassified, {} without a final price)",
        outcome.listings,
        input.display(),
        output.display(),
        outcome.unclassified,
        outcome.unpriced
    );
    Ok(())
}
