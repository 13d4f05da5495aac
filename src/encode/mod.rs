//! Design-matrix construction from the raw string table.
//!
//! Turns the mixed-type [`Table`] into a dense numeric matrix with a
//! deterministic column layout: numeric input columns pass through as one
//! output column each, categorical columns one-hot encode against their
//! sorted distinct values with the reference category dropped, and the
//! target column is routed into a separate vector.
//!
//! Numeric parsing never fails here: unparsable cells become `0.0`. That is
//! the named ParseDegradation policy of this pipeline (zero is an
//! acceptable neutral default for this domain), and tests assert the
//! default rather than expecting strictness.

mod categories;

pub use categories::{CategoryOrder, MISSING};

use std::collections::BTreeSet;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SalestatError};
use crate::ingest::Table;
use crate::summary;

/// Configuration for [`encode`].
///
/// The distinguished column names and the imputation allow-list are plain
/// data here so the pipeline can be exercised against synthetic schemas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Column routed into the target vector instead of the design matrix
    pub target_column: String,
    /// Columns skipped outright (not emitted, not encoded)
    pub drop_columns: Vec<String>,
    /// Additional columns excluded from the output
    pub ignored_columns: Vec<String>,
    /// Categorical columns whose missing cells are imputed with the mode
    pub imputable_columns: BTreeSet<String>,
}

impl EncodeOptions {
    /// Create empty options: no target, nothing dropped or imputed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target column.
    pub fn with_target_column(mut self, name: impl Into<String>) -> Self {
        self.target_column = name.into();
        self
    }

    /// Add a column to drop outright.
    pub fn with_drop_column(mut self, name: impl Into<String>) -> Self {
        self.drop_columns.push(name.into());
        self
    }

    /// Add columns to ignore.
    pub fn with_ignored_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add columns eligible for mode imputation of missing cells.
    pub fn with_imputable_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imputable_columns
            .extend(names.into_iter().map(Into::into));
        self
    }

    fn is_excluded(&self, name: &str) -> bool {
        name == self.target_column
            || self.drop_columns.iter().any(|c| c == name)
            || self.ignored_columns.iter().any(|c| c == name)
    }
}

/// The encoded dataset: design matrix, target vector, and the output
/// header/hint arrays aligned to the matrix columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    /// Dense design matrix, rows x output columns
    pub xs: Array2<f64>,
    /// Target values, one per row; all-zero when no target column existed
    pub ys: Array1<f64>,
    /// Output column names (`"<col>_<category>"` for encoded categories)
    pub header: Vec<String>,
    /// Whether each output column came from a categorical input
    pub hints: Vec<bool>,
}

impl Encoded {
    /// Number of rows in the design matrix.
    pub fn n_rows(&self) -> usize {
        self.xs.nrows()
    }

    /// Number of output columns.
    pub fn n_cols(&self) -> usize {
        self.xs.ncols()
    }
}

/// Whether a raw categorical cell counts as missing for imputation.
pub fn is_missing(value: &str) -> bool {
    value == MISSING || value.is_empty()
}

/// Parse a cell as `f64`, degrading to `0.0` on failure.
fn parse_or_zero(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(0.0)
}

/// Encode an ingested table into a design matrix and target vector.
///
/// `hints` is position-aligned to the input header (true = categorical) and
/// must match its length. Columns are visited in header order for every
/// row; the output header, hints, and column count are fixed by the first
/// data row and reused for all subsequent rows.
pub fn encode(table: &Table, hints: &[bool], options: &EncodeOptions) -> Result<Encoded> {
    if hints.len() != table.n_cols() {
        return Err(SalestatError::ValidationError(format!(
            "type hints cover {} columns but the header has {}",
            hints.len(),
            table.n_cols()
        )));
    }

    let modes = summary::modes(&table.index);

    // Category orders are derived once per encoded categorical column; the
    // per-row loop below only looks values up against them.
    let orders: Vec<Option<CategoryOrder>> = table
        .header
        .iter()
        .enumerate()
        .map(|(j, name)| {
            (hints[j] && !options.is_excluded(name))
                .then(|| CategoryOrder::from_index(&table.index[j]))
        })
        .collect();

    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    let mut out_header: Vec<String> = Vec::new();
    let mut out_hints: Vec<bool> = Vec::new();
    let mut cols = 0usize;

    for (i, row) in table.rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let name = table.header[j].as_str();

            if options.drop_columns.iter().any(|c| c == name) {
                continue;
            }
            if name == options.target_column {
                ys.push(parse_or_zero(cell));
                continue;
            }
            if options.ignored_columns.iter().any(|c| c == name) {
                continue;
            }

            match &orders[j] {
                Some(order) => {
                    let value = if is_missing(cell) && options.imputable_columns.contains(name) {
                        modes[j].as_str()
                    } else {
                        cell.as_str()
                    };
                    xs.extend(order.one_hot(value));
                    if i == 0 {
                        out_header.extend(order.names(name));
                        out_hints.extend(std::iter::repeat(true).take(order.width()));
                    }
                }
                None => {
                    xs.push(parse_or_zero(cell));
                    if i == 0 {
                        out_header.push(name.to_string());
                        out_hints.push(false);
                    }
                }
            }
        }
        if i == 0 {
            cols = xs.len();
        }
    }

    let rows = table.n_rows();
    let xs = Array2::from_shape_vec((rows, cols), xs)
        .map_err(|e| SalestatError::DataError(format!("design matrix shape: {e}")))?;
    let ys = if ys.is_empty() {
        Array1::zeros(rows)
    } else {
        Array1::from_vec(ys)
    };

    debug!(rows, cols, "encoded design matrix");

    Ok(Encoded {
        xs,
        ys,
        header: out_header,
        hints: out_hints,
    })
}
