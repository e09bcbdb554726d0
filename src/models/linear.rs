//! Ordinary least squares line with intercept.
//!
//! The fit centres both series on their means and solves for the slope on the
//! centred single-column design matrix; the intercept follows from the means.
//! Centring keeps the solve well conditioned when days are large numbers.

use nalgebra::{DMatrix, DVector};

use crate::domain::FitQuality;
use crate::error::AppError;
use crate::math::solve_least_squares;

/// A fitted line `amount = intercept + slope * day`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub quality: FitQuality,
}

impl LinearFit {
    /// Fit a line to `(x[i], y[i])`.
    ///
    /// When every `x` is identical the slope is 0 and the line sits at `mean(y)`.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, AppError> {
        if x.is_empty() {
            return Err(AppError::fit("cannot fit a line to zero samples"));
        }
        if x.len() != y.len() {
            return Err(AppError::fit(format!(
                "sample count mismatch: {} x values, {} y values",
                x.len(),
                y.len()
            )));
        }

        let n = x.len();
        let x_mean = mean(x);
        let y_mean = mean(y);

        let design = DMatrix::from_iterator(n, 1, x.iter().map(|v| v - x_mean));
        let target = DVector::from_iterator(n, y.iter().map(|v| v - y_mean));

        let beta = solve_least_squares(&design, &target)
            .ok_or_else(|| AppError::fit("least squares solve failed"))?;
        let slope = beta[0];
        let intercept = y_mean - slope * x_mean;

        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(AppError::fit("non-finite regression coefficients"));
        }

        let sse: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2))
            .sum();
        let sst: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();
        // A constant target is fitted exactly by the flat line.
        let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };

        Ok(Self {
            slope,
            intercept,
            quality: FitQuality {
                sse,
                rmse: (sse / n as f64).sqrt(),
                r_squared,
                n,
            },
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
