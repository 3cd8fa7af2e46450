pub mod category;
pub mod color;
pub mod error;
pub mod normalize;
pub mod price;
pub mod raw;
pub mod sizes;
pub mod table;
pub mod taxonomy;
pub mod text;

#[cfg(test)]
mod test_support;

pub use category::{classify, classify_with_fallback, Classification};
pub use color::normalize_color;
pub use error::TableError;
pub use normalize::{normalize_all, normalize_record};
pub use price::{derive_pricing, PriceDerivation};
pub use sizes::{clean_size_label, parse_sizes, stock_summary, StockBucket, StockSummary};
pub use table::{
    read_products, read_products_from_reader, write_normalized, write_normalized_to_writer,
    ProductRow, ProductTable,
};
pub use text::{best_name, clean_brand, clean_name};
