//! Conditional expectation of the target over a column's raw categories.

use std::collections::BTreeMap;

use crate::ingest::ColumnIndex;

/// Compute the conditional expectation function for one column.
///
/// For every distinct raw value of column `column`, the result maps the
/// value to the arithmetic mean of `targets[i]` over the rows holding it.
/// Every bucket in the inverted index is non-empty by construction, so the
/// division is always defined.
pub fn cef(targets: &[f64], column: usize, index: &[ColumnIndex]) -> BTreeMap<String, f64> {
    index[column]
        .iter()
        .map(|(value, positions)| {
            let sum: f64 = positions.iter().map(|&i| targets[i]).sum();
            (value.clone(), sum / positions.len() as f64)
        })
        .collect()
}
