//! CSV ingestion into a raw string table with per-column inverted indices.
//!
//! The first record of the input is always consumed as the header; every
//! subsequent record must carry exactly the same number of fields or
//! ingestion aborts with [`SalestatError::SchemaMismatch`]. Cells are kept
//! as raw strings; type interpretation happens later, in [`crate::encode`].

use std::collections::BTreeMap;
use std::io::Read;

use tracing::debug;

use crate::error::{Result, SalestatError};

/// Inverted index for one column: distinct raw value -> row positions.
///
/// A `BTreeMap` is used so that iteration order is the sorted value order,
/// which keeps every consumer (mode tie-breaks, category collection, CEF
/// output) deterministic.
pub type ColumnIndex = BTreeMap<String, Vec<usize>>;

/// An ingested table: header, row-major string cells, and one inverted
/// index per column. Built in a single pass and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names, in file order
    pub header: Vec<String>,
    /// Data rows; every row has exactly `header.len()` cells
    pub rows: Vec<Vec<String>>,
    /// Per-column inverted index, aligned to `header`
    pub index: Vec<ColumnIndex>,
}

impl Table {
    /// Number of data rows (the header is not a row).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of input columns.
    pub fn n_cols(&self) -> usize {
        self.header.len()
    }

    /// Position of a column by name, if present.
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Like [`Table::column_position`] but failing with
    /// [`SalestatError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_position(name)
            .ok_or_else(|| SalestatError::ColumnNotFound(name.to_string()))
    }
}

/// Ingest CSV text from `source` into a [`Table`].
///
/// Every populated column accumulates an inverted-index entry for every
/// value, including the first occurrence. Row numbers in the index (and in
/// `SchemaMismatch`) are 0-based data-row positions, excluding the header.
pub fn ingest<R: Read>(source: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => {
            return Err(SalestatError::DataError(
                "empty input: no header record".to_string(),
            ))
        }
    };

    let n_cols = header.len();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut index: Vec<ColumnIndex> = vec![ColumnIndex::new(); n_cols];

    for (row, record) in records.enumerate() {
        let record = record?;
        if record.len() != n_cols {
            return Err(SalestatError::SchemaMismatch {
                expected: n_cols,
                actual: record.len(),
                row,
            });
        }

        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        for (j, value) in cells.iter().enumerate() {
            index[j].entry(value.clone()).or_default().push(row);
        }
        rows.push(cells);
    }

    debug!(rows = rows.len(), cols = n_cols, "ingested table");

    Ok(Table {
        header,
        rows,
        index,
    })
}
