//! Report module — plot-ready data for external charting backends.
//!
//! Nothing here renders anything: the pipeline's presentation boundary is a
//! set of serializable point and bin sequences that any charting or report
//! backend can consume.

pub mod cef_plot;
pub mod histogram;

pub use cef_plot::{CefPlot, PlotPoint};
pub use histogram::{Histogram, HistogramBin};
