//! Equal-width histogram data over a value sequence.

use serde::{Deserialize, Serialize};

/// One histogram bin: half-open range `[min, max)` (the last bin is
/// closed) and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub min: f64,
    pub max: f64,
    pub weight: f64,
}

/// Binned value data for a histogram plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Default bin count used by the reporting pipeline.
    pub const DEFAULT_BINS: usize = 10;

    /// Bin `values` into `n_bins` equal-width bins spanning [min, max].
    ///
    /// Weights start out as raw counts; see [`Histogram::normalize`].
    pub fn new(values: &[f64], n_bins: usize) -> Self {
        if values.is_empty() || n_bins == 0 {
            return Self { bins: Vec::new() };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // A constant-valued input has zero range; a unit width keeps the
        // single occupied bin well-formed.
        let width = if max > min {
            (max - min) / n_bins as f64
        } else {
            1.0
        };

        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| HistogramBin {
                min: min + i as f64 * width,
                max: min + (i + 1) as f64 * width,
                weight: 0.0,
            })
            .collect();

        for &value in values {
            let position = ((value - min) / width) as usize;
            bins[position.min(n_bins - 1)].weight += 1.0;
        }

        Self { bins }
    }

    /// Scale weights so the total bar area equals `total`.
    pub fn normalize(&mut self, total: f64) {
        let area: f64 = self
            .bins
            .iter()
            .map(|bin| bin.weight * (bin.max - bin.min))
            .sum();
        if area > 0.0 {
            let scale = total / area;
            for bin in &mut self.bins {
                bin.weight *= scale;
            }
        }
    }

    /// Sum of all bin weights.
    pub fn total_weight(&self) -> f64 {
        self.bins.iter().map(|bin| bin.weight).sum()
    }
}
