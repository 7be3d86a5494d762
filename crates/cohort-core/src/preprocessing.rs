//! Numeric standardization with a previously fit scaler.
//!
//! Fitting happens in the external training step; at inference time the
//! scaler arrives as an artifact holding per-column mean/std and is only
//! ever applied, never refit.

use serde::Deserialize;

use crate::math::Array2;

/// Per-column mean/std standardizer for the leading numeric columns.
#[derive(Clone, Debug, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f32 = 1e-6;

    /// Number of columns this scaler standardizes.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Standardize the first `width()` columns of `x` in place, leaving the
    /// remaining columns untouched.
    ///
    /// Panics if `x` has fewer columns than the scaler; callers validate
    /// widths once at construction time.
    pub fn transform(&self, x: &mut Array2<f32>) {
        assert!(
            x.ncols() >= self.width(),
            "matrix has {} columns, scaler expects at least {}",
            x.ncols(),
            self.width()
        );
        for r in 0..x.nrows() {
            for c in 0..self.width() {
                let std = self.std[c].max(Self::MIN_STD);
                x[(r, c)] = (x[(r, c)] - self.mean[c]) / std;
            }
        }
    }
}
