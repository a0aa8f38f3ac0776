//! The hand-rolled evaluator and its comparison against the reference.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::PolyError;

/// `sum_n c_n * z^n`, every power computed explicitly. Compare with
/// [`crate::math::Polynomial::eval`], which uses Horner's scheme.
pub fn power_sum(coeffs: &Array1<Complex64>, z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(n, &c)| c * z.powu(n as u32))
        .sum()
}

/// Apply [`power_sum`] at every grid point.
pub fn evaluate_power_sum(
    coeffs: &Array1<Complex64>,
    points: &Array2<Complex64>,
) -> Array2<Complex64> {
    points.mapv(|z| power_sum(coeffs, z))
}

/// Worst-case disagreement between two evaluations of the same grid.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationDiff {
    /// Largest `|f - p|`.
    pub max_abs: f64,
    /// Largest `|f - p| / |p|` over points where `p != 0`.
    pub max_rel: f64,
    /// Grid index of `max_abs`.
    pub worst_index: (usize, usize),
    /// `(|f - p|, |p|)` at every grid point, in row-major order.
    per_point: Vec<(f64, f64)>,
}

impl EvaluationDiff {
    /// True when `|f - p| <= atol + rtol * |p|` holds at every grid point.
    pub fn allclose(&self, rtol: f64, atol: f64) -> bool {
        self.per_point
            .iter()
            .all(|&(diff, reference)| diff <= atol + rtol * reference)
    }

    pub fn num_points(&self) -> usize {
        self.per_point.len()
    }
}

/// Compare a manual evaluation `f` against a reference evaluation `p`.
pub fn compare(
    f: &Array2<Complex64>,
    p: &Array2<Complex64>,
) -> Result<EvaluationDiff, PolyError> {
    if f.dim() != p.dim() {
        return Err(PolyError::ShapeMismatch {
            expected: p.dim(),
            found: f.dim(),
        });
    }

    let mut max_abs = 0.0f64;
    let mut max_rel = 0.0f64;
    let mut worst_index = (0, 0);
    let mut per_point = Vec::with_capacity(f.len());

    for ((index, fv), pv) in f.indexed_iter().zip(p.iter()) {
        let diff = (fv - pv).norm();
        let reference = pv.norm();
        if diff > max_abs {
            max_abs = diff;
            worst_index = index;
        }
        if reference > 0.0 {
            max_rel = max_rel.max(diff / reference);
        }
        per_point.push((diff, reference));
    }

    Ok(EvaluationDiff {
        max_abs,
        max_rel,
        worst_index,
        per_point,
    })
}
