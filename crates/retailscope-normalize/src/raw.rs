//! Tagged view over a raw scraped cell.
//!
//! Scraped columns hold plain text, JSON objects serialized as text, or
//! nothing at all. [`RawField::parse`] decides which once, so extractors match
//! on a variant instead of re-sniffing strings.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum RawField {
    /// Absent, empty or whitespace-only.
    Missing,
    /// A cell that parsed as a JSON object.
    Json(Map<String, Value>),
    /// Anything else, trimmed. Includes text that looked like JSON but did
    /// not parse.
    Text(String),
}

impl RawField {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return RawField::Missing;
        };

        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
                return RawField::Json(map);
            }
        }

        RawField::Text(trimmed.to_owned())
    }
}

/// First string value stored under one of `keys`, probed in order.
#[must_use]
pub fn probe_keys<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
}

/// First string value anywhere at the top level of `map`, in document order.
#[must_use]
pub fn first_string_value(map: &Map<String, Value>) -> Option<&str> {
    map.values().find_map(Value::as_str)
}
