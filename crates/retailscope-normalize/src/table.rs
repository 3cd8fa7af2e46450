//! CSV table I/O.
//!
//! Reading keeps every non-derived column verbatim so the written table is
//! the input plus the derived columns. Derived columns already present in
//! the input are dropped on read, which makes re-normalizing an output file
//! a no-op.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use retailscope_core::{NormalizedRecord, ProductRecord, DERIVED_COLUMNS};

use crate::error::TableError;

/// A scraped product table: passthrough columns plus one typed record per
/// row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTable {
    /// Header names in input order, derived columns excluded.
    pub columns: Vec<String>,
    pub rows: Vec<ProductRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Raw cells aligned with [`ProductTable::columns`]. Short rows are
    /// padded with empty cells.
    pub cells: Vec<String>,
    pub record: ProductRecord,
}

impl ProductTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Typed records in row order.
    #[must_use]
    pub fn records(&self) -> Vec<ProductRecord> {
        self.rows.iter().map(|row| row.record.clone()).collect()
    }
}

/// Reads a product table from a CSV file.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be opened and
/// [`TableError::Csv`] on malformed CSV.
pub fn read_products(path: &Path) -> Result<ProductTable, TableError> {
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_products_from_reader(file)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns.len(),
        "read product table"
    );
    Ok(table)
}

/// Reads a product table from any CSV source with a header row.
///
/// # Errors
///
/// Returns [`TableError::Csv`] on malformed CSV.
pub fn read_products_from_reader<R: Read>(reader: R) -> Result<ProductTable, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let kept: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !DERIVED_COLUMNS.contains(name))
        .map(|(idx, _)| idx)
        .collect();
    let dropped = headers.len() - kept.len();
    if dropped > 0 {
        tracing::debug!(dropped, "ignoring previously derived columns");
    }

    let columns = kept.iter().map(|&idx| headers[idx].to_owned()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let raw = result?;
        let cells = kept
            .iter()
            .map(|&idx| raw.get(idx).unwrap_or_default().to_owned())
            .collect();
        rows.push(ProductRow {
            cells,
            record: record_from_row(&headers, &raw),
        });
    }

    Ok(ProductTable { columns, rows })
}

/// Writes the table's passthrough columns followed by the derived columns
/// to a CSV file, creating or truncating it.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be created,
/// [`TableError::RowCountMismatch`] if `normalized` does not line up with
/// the table's rows, and [`TableError::Csv`] on write failure.
pub fn write_normalized(
    path: &Path,
    table: &ProductTable,
    normalized: &[NormalizedRecord],
) -> Result<(), TableError> {
    let file = File::create(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_normalized_to_writer(file, table, normalized)?;
    tracing::info!(
        path = %path.display(),
        rows = normalized.len(),
        "wrote normalized table"
    );
    Ok(())
}

/// Writes the normalized table to any sink.
///
/// # Errors
///
/// Returns [`TableError::RowCountMismatch`] if `normalized` does not line up
/// with the table's rows, and [`TableError::Csv`] on write failure.
pub fn write_normalized_to_writer<W: Write>(
    writer: W,
    table: &ProductTable,
    normalized: &[NormalizedRecord],
) -> Result<(), TableError> {
    if table.rows.len() != normalized.len() {
        return Err(TableError::RowCountMismatch {
            rows: table.rows.len(),
            records: normalized.len(),
        });
    }

    let mut writer = csv::WriterBuilder::new().from_writer(writer);

    let header = table
        .columns
        .iter()
        .map(String::as_str)
        .chain(DERIVED_COLUMNS);
    writer.write_record(header)?;

    for (row, record) in table.rows.iter().zip(normalized) {
        let derived = record.derived_cells();
        let cells = row
            .cells
            .iter()
            .map(String::as_str)
            .chain(derived.iter().map(String::as_str));
        writer.write_record(cells)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn record_from_row(headers: &csv::StringRecord, raw: &csv::StringRecord) -> ProductRecord {
    let mut record = ProductRecord::default();
    for (name, value) in headers.iter().zip(raw.iter()) {
        if value.is_empty() {
            continue;
        }
        let slot = match name {
            "product_name" => &mut record.product_name,
            "name" => &mut record.name,
            "brand" => &mut record.brand,
            "brand_name" => &mut record.brand_name,
            "discovery_input" => &mut record.discovery_input,
            "color" => &mut record.color,
            "colors" => &mut record.colors,
            "initial_price" => &mut record.initial_price,
            "final_price" => &mut record.final_price,
            "in_stock" => &mut record.in_stock,
            "main_image" => &mut record.main_image,
            "sizes" => &mut record.sizes,
            "sku" => &mut record.sku,
            "product_url" => &mut record.product_url,
            _ => continue,
        };
        // First occurrence wins for duplicated headers.
        if slot.is_none() {
            *slot = Some(value.to_owned());
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_all;

    const SAMPLE: &str = "\
sku,product_name,brand,final_price,initial_price,discovery_input,color,extra
A1,3 Pack Cotton Briefs,sloggi,30,40,/damen/slips/,schwarz,keep me
A2,,dorina,,,,,
";

    #[test]
    fn reads_columns_and_records() {
        let table = read_products_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            table.columns,
            vec![
                "sku",
                "product_name",
                "brand",
                "final_price",
                "initial_price",
                "discovery_input",
                "color",
                "extra"
            ]
        );
        assert_eq!(table.len(), 2);

        let first = &table.rows[0].record;
        assert_eq!(first.sku.as_deref(), Some("A1"));
        assert_eq!(first.product_name.as_deref(), Some("3 Pack Cotton Briefs"));
        assert_eq!(first.final_price.as_deref(), Some("30"));
        assert_eq!(table.rows[0].cells[7], "keep me");
    }

    #[test]
    fn empty_cells_are_missing() {
        let table = read_products_from_reader(SAMPLE.as_bytes()).unwrap();
        let second = &table.rows[1].record;
        assert_eq!(second.product_name, None);
        assert_eq!(second.final_price, None);
        assert_eq!(second.brand.as_deref(), Some("dorina"));
    }

    #[test]
    fn short_rows_are_padded() {
        let csv = "sku,brand,color\nA1,sloggi\n";
        let table = read_products_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].cells, vec!["A1", "sloggi", ""]);
        assert_eq!(table.rows[0].record.color, None);
    }

    #[test]
    fn derived_columns_are_dropped_on_read() {
        let csv = "sku,brand_clean,brand,pack_size\nA1,Stale,sloggi,9\n";
        let table = read_products_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["sku", "brand"]);
        assert_eq!(table.rows[0].cells, vec!["A1", "sloggi"]);
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let csv = " sku , brand \nA1,sloggi\n";
        let table = read_products_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].record.brand.as_deref(), Some("sloggi"));
    }

    #[test]
    fn writes_passthrough_then_derived_columns() {
        let table = read_products_from_reader(SAMPLE.as_bytes()).unwrap();
        let normalized = normalize_all(&table.records());

        let mut out = Vec::new();
        write_normalized_to_writer(&mut out, &table, &normalized).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some(
                "sku,product_name,brand,final_price,initial_price,discovery_input,color,extra,\
                 brand_clean,best_name,category_clean,specific_category,color_clean,\
                 discount_pct,pack_size,price_per_item"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "A1,3 Pack Cotton Briefs,sloggi,30,40,/damen/slips/,schwarz,keep me,\
                 Sloggi,3 Pack Cotton Briefs,Underwear,Slip,Black,25,3,10"
            )
        );
        assert_eq!(
            lines.next(),
            Some("A2,,dorina,,,,,,Dorina,Unknown,,,Unknown,,1,")
        );
    }

    #[test]
    fn mismatched_row_count_is_rejected() {
        let table = read_products_from_reader(SAMPLE.as_bytes()).unwrap();
        let err = write_normalized_to_writer(Vec::new(), &table, &[]).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowCountMismatch {
                rows: 2,
                records: 0
            }
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_products(Path::new("/nonexistent/products.csv")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
