//! Column statistics and variance-stabilizing transforms.
//!
//! The only mutation in the whole pipeline happens here: numeric design-
//! matrix columns whose skewness exceeds [`SKEW_THRESHOLD`] are replaced in
//! place by their `ln(1 + v)` transform. Mutable access flows through
//! ndarray column views owned by the call, so there is exactly one owner of
//! the matrix at a time.

use ndarray::{Array2, ArrayView1, ArrayViewMut1};
use tracing::debug;

/// Numeric columns with sample skewness above this are log1p-transformed.
pub const SKEW_THRESHOLD: f64 = 0.75;

/// Bias-corrected sample skewness (adjusted Fisher-Pearson).
///
/// Computes `n / ((n-1)(n-2)) * sum(((x - mean) / s)^3)` with `s` the
/// sample standard deviation. Degenerate inputs (fewer than three values,
/// or zero variance) yield `0.0`, which never trips the transform policy.
pub fn skew(column: ArrayView1<'_, f64>) -> f64 {
    let n = column.len();
    if n < 3 {
        return 0.0;
    }

    let nf = n as f64;
    let mean = column.sum() / nf;
    let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let std_dev = variance.sqrt();
    if std_dev <= 0.0 {
        return 0.0;
    }

    let cubed_sum: f64 = column
        .iter()
        .map(|v| ((v - mean) / std_dev).powi(3))
        .sum();

    cubed_sum * nf / ((nf - 1.0) * (nf - 2.0))
}

/// Replace every value `v` of the column with `ln(1 + v)`, in place.
///
/// Defined only for `v > -1`; values at or below -1 produce a non-finite
/// result and are not special-cased. The transform policy only ever applies
/// this to positively skewed columns, which in this domain are non-negative
/// monetary and area measures.
pub fn log1p_column(mut column: ArrayViewMut1<'_, f64>) {
    column.mapv_inplace(f64::ln_1p);
}

/// Apply the skew policy to a design matrix.
///
/// Every numeric (non-categorical per `hints`) column with sample skewness
/// above `threshold` is log1p-transformed in place. Categorical output
/// columns are never touched. Returns the positions of the transformed
/// columns.
pub fn transform_skewed(xs: &mut Array2<f64>, hints: &[bool], threshold: f64) -> Vec<usize> {
    let mut transformed = Vec::new();

    for j in 0..xs.ncols() {
        if hints.get(j).copied().unwrap_or(false) {
            continue;
        }
        let skewness = skew(xs.column(j));
        if skewness > threshold {
            log1p_column(xs.column_mut(j));
            debug!(column = j, skewness, "log1p-transformed skewed column");
            transformed.push(j);
        }
    }

    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_skew_of_symmetric_data_is_zero() {
        let column = arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(skew(column.view()).abs() < 1e-12);
    }

    #[test]
    fn test_skew_of_right_tailed_data_is_positive() {
        let column = arr1(&[1.0, 1.0, 1.0, 1.0, 10.0]);
        let s = skew(column.view());
        assert!(s > 2.0, "expected strong positive skew, got {s}");
    }

    #[test]
    fn test_skew_matches_reference_value() {
        // n=5, mean=2.8, s=4.0249...: adjusted skewness ~= 2.2361
        let column = arr1(&[1.0, 1.0, 1.0, 1.0, 10.0]);
        let s = skew(column.view());
        assert!((s - 2.2360679).abs() < 1e-6, "got {s}");
    }

    #[test]
    fn test_skew_degenerate_inputs() {
        assert_eq!(skew(arr1(&[1.0, 2.0]).view()), 0.0);
        assert_eq!(skew(arr1(&[3.0, 3.0, 3.0, 3.0]).view()), 0.0);
    }

    #[test]
    fn test_log1p_column_in_place() {
        let mut column = arr1(&[0.0, 1.0, std::f64::consts::E - 1.0]);
        log1p_column(column.view_mut());
        assert!((column[0] - 0.0).abs() < 1e-12);
        assert!((column[1] - 2.0f64.ln()).abs() < 1e-12);
        assert!((column[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_applies_only_above_threshold() {
        // Column 0 is heavily right-tailed, column 1 symmetric.
        let mut xs = arr2(&[
            [1.0, 1.0],
            [1.0, 2.0],
            [1.0, 3.0],
            [1.0, 4.0],
            [10.0, 5.0],
        ]);
        let untouched = xs.column(1).to_vec();

        let transformed = transform_skewed(&mut xs, &[false, false], SKEW_THRESHOLD);

        assert_eq!(transformed, vec![0]);
        for (i, v) in [1.0, 1.0, 1.0, 1.0, 10.0f64].iter().enumerate() {
            assert!((xs[[i, 0]] - v.ln_1p()).abs() < 1e-12);
        }
        assert_eq!(xs.column(1).to_vec(), untouched);
    }

    #[test]
    fn test_transform_never_touches_categorical_columns() {
        let mut xs = arr2(&[
            [0.0, 1.0],
            [0.0, 1.0],
            [0.0, 1.0],
            [0.0, 1.0],
            [1.0, 10.0],
        ]);
        let before = xs.clone();

        let transformed = transform_skewed(&mut xs, &[true, true], SKEW_THRESHOLD);

        assert!(transformed.is_empty());
        assert_eq!(xs, before);
    }
}
