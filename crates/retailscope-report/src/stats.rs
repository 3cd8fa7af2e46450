use std::cmp::Ordering;
use std::collections::BTreeMap;

use retailscope_core::NormalizedRecord;

/// Label used for listings without a main category.
pub const OTHER_CATEGORY: &str = "Other";

/// Arithmetic mean of the present values. `None` when nothing is present.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean over the strictly positive values only. Average discount is taken
/// over discounted listings.
pub(crate) fn mean_positive<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    mean(values.into_iter().map(|v| v.filter(|v| *v > 0.0)))
}

/// Groups `records` by `key`, skipping records without one. Group order is
/// the key order.
pub(crate) fn group_by<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, Vec<&'a NormalizedRecord>>
where
    K: Ord,
    I: IntoIterator<Item = &'a NormalizedRecord>,
    F: Fn(&'a NormalizedRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, Vec<&'a NormalizedRecord>> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            groups.entry(k).or_default().push(record);
        }
    }
    groups
}

/// Orders optional values descending with `None` last.
pub(crate) fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `part / whole` as a percentage rounded to two decimals; 0 for an empty
/// whole.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}
