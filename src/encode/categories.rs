//! Deterministic category ordering for one-hot encoding.

use crate::ingest::ColumnIndex;

/// Sentinel raw value for a missing categorical cell.
pub const MISSING: &str = "NA";

/// The fixed, sorted category order for one categorical column.
///
/// The first entry is the reference category: it is encoded as the implicit
/// all-zero vector and never emitted as an output column. Ordering rule:
/// when every distinct value except possibly `"NA"` parses as an integer,
/// categories sort numerically ascending with `"NA"` (if present) forced to
/// the front; otherwise they sort lexicographically ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    order: Vec<String>,
}

impl CategoryOrder {
    /// Build the order from a column's inverted index.
    pub fn from_index(index: &ColumnIndex) -> Self {
        // BTreeMap keys already arrive lexicographically sorted.
        let keys: Vec<String> = index.keys().cloned().collect();
        let order = numeric_order(&keys).unwrap_or(keys);
        Self { order }
    }

    /// The dropped reference category, if the column has any values.
    pub fn reference(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Categories that produce output columns, in order.
    pub fn encoded(&self) -> &[String] {
        if self.order.is_empty() {
            &[]
        } else {
            &self.order[1..]
        }
    }

    /// Number of output columns this column contributes.
    pub fn width(&self) -> usize {
        self.order.len().saturating_sub(1)
    }

    /// One-hot encode a raw cell value against this order.
    ///
    /// The reference category (and only it, since the order covers every
    /// value observed in the column) maps to the all-zero vector.
    pub fn one_hot(&self, value: &str) -> Vec<f64> {
        let mut encoded = vec![0.0; self.width()];
        if let Some(position) = self.encoded().iter().position(|cat| cat == value) {
            encoded[position] = 1.0;
        }
        encoded
    }

    /// Derived output column names: `"<column>_<category>"` for every
    /// non-reference category.
    pub fn names(&self, column: &str) -> Vec<String> {
        self.encoded()
            .iter()
            .map(|cat| format!("{column}_{cat}"))
            .collect()
    }
}

/// Numeric ordering, when it applies.
///
/// Returns `None` unless every key except `"NA"` parses as an integer. In
/// the numeric case `"NA"` is the lowest category (no real category in this
/// domain is negative) and therefore lands at the front.
fn numeric_order(keys: &[String]) -> Option<Vec<String>> {
    let mut has_missing = false;
    let mut numeric: Vec<(i64, &String)> = Vec::with_capacity(keys.len());

    for key in keys {
        if key == MISSING {
            has_missing = true;
            continue;
        }
        match key.parse::<i64>() {
            Ok(value) => numeric.push((value, key)),
            Err(_) => return None,
        }
    }

    let mut order = Vec::with_capacity(keys.len());
    if has_missing {
        order.push(MISSING.to_string());
    }
    numeric.sort_by_key(|(value, _)| *value);
    order.extend(numeric.into_iter().map(|(_, key)| key.clone()));
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ColumnIndex;

    fn index_of(values: &[&str]) -> ColumnIndex {
        let mut index = ColumnIndex::new();
        for (row, value) in values.iter().enumerate() {
            index.entry(value.to_string()).or_default().push(row);
        }
        index
    }

    #[test]
    fn test_numeric_categories_sort_ascending_with_na_front() {
        let order = CategoryOrder::from_index(&index_of(&["NA", "1", "1", "2"]));
        assert_eq!(order.reference(), Some("NA"));
        assert_eq!(order.encoded(), ["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_one_hot_drops_reference() {
        let order = CategoryOrder::from_index(&index_of(&["NA", "1", "1", "2"]));
        assert_eq!(order.one_hot("2"), vec![0.0, 1.0]);
        assert_eq!(order.one_hot("1"), vec![1.0, 0.0]);
        assert_eq!(order.one_hot("NA"), vec![0.0, 0.0]);
    }

    #[test]
    fn test_derived_names_follow_sorted_order() {
        let order = CategoryOrder::from_index(&index_of(&["NA", "1", "2"]));
        assert_eq!(order.names("Bath"), vec!["Bath_1", "Bath_2"]);
    }

    #[test]
    fn test_numeric_sort_is_by_value_not_by_string() {
        let order = CategoryOrder::from_index(&index_of(&["10", "2", "1"]));
        assert_eq!(order.reference(), Some("1"));
        assert_eq!(order.encoded(), ["2".to_string(), "10".to_string()]);
    }

    #[test]
    fn test_numeric_without_na_uses_lowest_as_reference() {
        // Preserved quirk: with no NA sentinel the first ascending numeric
        // value silently becomes the all-zero reference.
        let order = CategoryOrder::from_index(&index_of(&["3", "5", "8"]));
        assert_eq!(order.reference(), Some("3"));
        assert_eq!(order.width(), 2);
    }

    #[test]
    fn test_lexicographic_fallback() {
        let order = CategoryOrder::from_index(&index_of(&["RM", "RL", "FV"]));
        assert_eq!(order.reference(), Some("FV"));
        assert_eq!(order.encoded(), ["RL".to_string(), "RM".to_string()]);
    }

    #[test]
    fn test_mixed_values_fall_back_to_lexicographic() {
        let order = CategoryOrder::from_index(&index_of(&["1", "2", "Grvl"]));
        assert_eq!(order.reference(), Some("1"));
        assert_eq!(
            order.encoded(),
            ["2".to_string(), "Grvl".to_string()]
        );
    }

    #[test]
    fn test_negative_numeric_categories_still_sort() {
        let order = CategoryOrder::from_index(&index_of(&["-1", "0", "2"]));
        assert_eq!(order.reference(), Some("-1"));
    }
}
