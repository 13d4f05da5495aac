//! Per-column descriptive summaries derived from the inverted index.

use serde::{Deserialize, Serialize};

use crate::ingest::{ColumnIndex, Table};

/// Number of distinct raw values per column.
pub fn cardinality(index: &[ColumnIndex]) -> Vec<usize> {
    index.iter().map(|column| column.len()).collect()
}

/// Most frequent raw value per column.
///
/// Ties break to the lexicographically smallest value; a column with no
/// data yields the empty string.
pub fn modes(index: &[ColumnIndex]) -> Vec<String> {
    index
        .iter()
        .map(|column| {
            let mut best = String::new();
            let mut best_count = 0usize;
            for (value, positions) in column {
                if positions.len() > best_count {
                    best_count = positions.len();
                    best = value.clone();
                }
            }
            best
        })
        .collect()
}

/// Summary of a single input column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name
    pub column: String,
    /// Number of distinct raw values
    pub cardinality: usize,
    /// Most frequent raw value
    pub mode: String,
}

/// Summarize every column of an ingested table.
pub fn summarize(table: &Table) -> Vec<ColumnSummary> {
    let cards = cardinality(&table.index);
    let modes = modes(&table.index);
    table
        .header
        .iter()
        .zip(cards)
        .zip(modes)
        .map(|((name, cardinality), mode)| ColumnSummary {
            column: name.clone(),
            cardinality,
            mode,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use std::io::Cursor;

    fn index_of(pairs: &[(&str, &[usize])]) -> ColumnIndex {
        pairs
            .iter()
            .map(|(value, rows)| (value.to_string(), rows.to_vec()))
            .collect()
    }

    #[test]
    fn test_cardinality_counts_distinct_values() {
        let index = vec![
            index_of(&[("A", &[0, 1]), ("B", &[2])]),
            index_of(&[("x", &[0, 1, 2])]),
        ];
        assert_eq!(cardinality(&index), vec![2, 1]);
    }

    #[test]
    fn test_mode_picks_largest_bucket() {
        let index = vec![index_of(&[
            ("A", &[0, 1, 2]),
            ("B", &[3, 4, 5, 6, 7]),
            ("NA", &[8]),
        ])];
        assert_eq!(modes(&index), vec!["B".to_string()]);
    }

    #[test]
    fn test_mode_tie_breaks_lexicographically() {
        let index = vec![index_of(&[("Z", &[0, 1]), ("A", &[2, 3])])];
        assert_eq!(modes(&index), vec!["A".to_string()]);
    }

    #[test]
    fn test_mode_of_empty_column_is_empty_string() {
        let index = vec![ColumnIndex::new()];
        assert_eq!(modes(&index), vec![String::new()]);
    }

    #[test]
    fn test_summarize_aligns_with_header() {
        let csv = "Zone,Qual\nRL,5\nRM,5\nRL,7\n";
        let table = ingest(Cursor::new(csv)).unwrap();
        let summary = summarize(&table);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].column, "Zone");
        assert_eq!(summary[0].cardinality, 2);
        assert_eq!(summary[0].mode, "RL");
        assert_eq!(summary[1].cardinality, 2);
        assert_eq!(summary[1].mode, "5");
    }
}
