//! Size-variant decoding and stock summaries.
//!
//! The `sizes` column carries a JSON array such as
//! `[{"name": "75B", "availability": true}, ...]`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use retailscope_core::{SizeEntry, UNKNOWN};
use serde::Serialize;
use serde_json::Value;

use crate::price::round2;

static SLASH_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}/[0-9]{2})").expect("valid slash size regex"));
static CUP_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+[A-Za-z]+)").expect("valid cup size regex"));
static NUMERIC_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)").expect("valid numeric size regex"));
static WORD_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]+)").expect("valid word size regex"));

/// Decodes a raw `sizes` cell. Malformed or non-array input is empty.
///
/// `availability` follows JSON truthiness and defaults to available when
/// absent; elements that are not objects are skipped.
#[must_use]
pub fn parse_sizes(raw: Option<&str>) -> Vec<SizeEntry> {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) else {
        tracing::trace!(raw = text, "sizes cell is not a JSON array");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| SizeEntry {
            name: obj
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN)
                .to_owned(),
            available: obj.get("availability").map_or(true, is_truthy),
        })
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Availability across one listing's size variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockSummary {
    pub in_stock: usize,
    pub total: usize,
    pub in_stock_pct: f64,
}

impl StockSummary {
    #[must_use]
    pub fn bucket(&self) -> StockBucket {
        StockBucket::from_pct(self.in_stock_pct)
    }
}

/// `None` for a listing without size variants.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stock_summary(entries: &[SizeEntry]) -> Option<StockSummary> {
    if entries.is_empty() {
        return None;
    }
    let total = entries.len();
    let in_stock = entries.iter().filter(|e| e.available).count();
    Some(StockSummary {
        in_stock,
        total,
        in_stock_pct: round2(in_stock as f64 / total as f64 * 100.0),
    })
}

/// Coarse availability band used for stock histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StockBucket {
    #[serde(rename = "100%")]
    Full,
    #[serde(rename = ">90%")]
    Above90,
    #[serde(rename = ">80%")]
    Above80,
    #[serde(rename = ">70%")]
    Above70,
    #[serde(rename = "<70%")]
    Below70,
}

impl StockBucket {
    pub const ALL: [StockBucket; 5] = [
        StockBucket::Full,
        StockBucket::Above90,
        StockBucket::Above80,
        StockBucket::Above70,
        StockBucket::Below70,
    ];

    #[must_use]
    pub fn from_pct(pct: f64) -> Self {
        if pct >= 100.0 {
            StockBucket::Full
        } else if pct > 90.0 {
            StockBucket::Above90
        } else if pct > 80.0 {
            StockBucket::Above80
        } else if pct > 70.0 {
            StockBucket::Above70
        } else {
            StockBucket::Below70
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StockBucket::Full => "100%",
            StockBucket::Above90 => ">90%",
            StockBucket::Above80 => ">80%",
            StockBucket::Above70 => ">70%",
            StockBucket::Below70 => "<70%",
        }
    }
}

impl fmt::Display for StockBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparable size label: `"75/80 S"` → `"75/80"`, `"75B"` → `"75B"`,
/// `"1234"` → `"12"`, `"XL (42)"` → `"XL"`.
#[must_use]
pub fn clean_size_label(name: &str) -> String {
    if let Some(m) = SLASH_SIZE_RE.find(name) {
        return m.as_str().to_owned();
    }
    if let Some(m) = CUP_SIZE_RE.find(name) {
        return m.as_str().to_owned();
    }
    if let Some(m) = NUMERIC_SIZE_RE.find(name) {
        return m.as_str().chars().take(2).collect();
    }
    WORD_SIZE_RE
        .find(name)
        .map_or_else(|| name.to_owned(), |m| m.as_str().to_owned())
}
