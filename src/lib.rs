//! salestat - house-sale tabular analysis pipeline
//!
//! Ingests a CSV of house-sale records, cleans and encodes it into numeric
//! matrices, and produces descriptive statistics and plot-ready data.
//!
//! # Modules
//!
//! ## Core pipeline
//! - [`ingest`] - CSV parsing into a raw string table + inverted indices
//! - [`summary`] - Per-column cardinality and mode
//! - [`encode`] - Design-matrix construction (one-hot, imputation, target)
//! - [`cef`] - Conditional expectation of the target per category
//! - [`stats`] - Skewness and the log1p transform policy
//!
//! ## Boundary
//! - [`report`] - Plot-ready point/bin data for external charting backends
//! - [`housing`] - Bundled house-sale schema (hints, allow-lists)
//! - [`cli`] - Command-line interface

pub mod cef;
pub mod cli;
pub mod encode;
pub mod error;
pub mod housing;
pub mod ingest;
pub mod report;
pub mod stats;
pub mod summary;

pub use error::{Result, SalestatError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cef::cef;
    pub use crate::encode::{encode, CategoryOrder, EncodeOptions, Encoded};
    pub use crate::error::{Result, SalestatError};
    pub use crate::ingest::{ingest, ColumnIndex, Table};
    pub use crate::report::{CefPlot, Histogram, HistogramBin, PlotPoint};
    pub use crate::stats::{log1p_column, skew, transform_skewed, SKEW_THRESHOLD};
    pub use crate::summary::{cardinality, modes, summarize, ColumnSummary};
}
