//! CEF plot data: an ordered (x, y) point sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single plot point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Line/point plot data for a conditional-expectation curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CefPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<PlotPoint>,
}

impl CefPlot {
    /// Build plot points from a CEF map.
    ///
    /// Categories are taken in sorted key order. A category key that parses
    /// as a number becomes its own x coordinate; otherwise the point falls
    /// back to its position in the sorted order.
    pub fn from_cef(cef: &BTreeMap<String, f64>) -> Self {
        let points = cef
            .iter()
            .enumerate()
            .map(|(position, (category, &mean))| PlotPoint {
                x: category.parse::<f64>().unwrap_or(position as f64),
                y: mean,
            })
            .collect();

        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            points,
        }
    }

    /// Set the plot title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the axis labels.
    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }
}
