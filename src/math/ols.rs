//! Least squares solver.
//!
//! Solves
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! with an SVD so that rank-deficient design matrices (e.g. every day identical)
//! still produce an answer: singular values under the tolerance are treated as zero,
//! which yields the minimum-norm solution instead of an error.

use nalgebra::{DMatrix, DVector};

/// Relative tolerance for treating a singular value as zero.
const RCOND: f64 = 1e-12;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the shapes disagree, the system is empty, or the solution
/// contains non-finite values.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() == 0 || x.ncols() == 0 || x.nrows() != y.len() {
        return None;
    }

    let svd = x.clone().svd(true, true);

    // Scale the cutoff with the largest singular value so that inputs measured in
    // large units are not considered singular.
    let max_sv = svd.singular_values.max();
    let eps = (max_sv * RCOND).max(f64::MIN_POSITIVE);

    let beta = svd.solve(y, eps).ok()?;
    if beta.iter().all(|v| v.is_finite()) {
        Some(beta)
    } else {
        None
    }
}
