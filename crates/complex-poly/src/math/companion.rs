//! Polynomial roots via companion matrix eigenvalues.

use nalgebra::{DMatrix, Schur};
use num_complex::Complex64;

use crate::error::PolyError;

/// Convergence tolerance handed to the Schur decomposition.
const SCHUR_EPS: f64 = f64::EPSILON;
/// Upper bound on QR sweeps before the decomposition is reported as diverged.
pub const MAX_SCHUR_ITERATIONS: usize = 10_000;

/// Build the companion matrix of the polynomial `coeffs` (ascending order).
///
/// The polynomial is first made monic, `x^n + a_{n-1} x^{n-1} + ... + a_0`,
/// and the matrix is
///
/// ```text
/// C = [ 0   0   ...  0  -a_0    ]
///     [ 1   0   ...  0  -a_1    ]
///     [ 0   1   ...  0  -a_2    ]
///     [ .   .   ...  .   .      ]
///     [ 0   0   ...  1  -a_{n-1}]
/// ```
///
/// Needs at least two coefficients and a non-zero leading one; anything else
/// is rejected with [`PolyError::DegenerateCompanion`].
pub fn companion_matrix(coeffs: &[Complex64]) -> Result<DMatrix<Complex64>, PolyError> {
    let leading = match coeffs.last() {
        Some(c) if coeffs.len() >= 2 && *c != Complex64::new(0.0, 0.0) => *c,
        _ => {
            return Err(PolyError::DegenerateCompanion {
                num_coeffs: coeffs.len(),
            })
        }
    };
    let degree = coeffs.len() - 1;
    let mut companion = DMatrix::from_element(degree, degree, Complex64::new(0.0, 0.0));

    for i in 1..degree {
        companion[(i, i - 1)] = Complex64::new(1.0, 0.0);
    }
    for (i, c) in coeffs[..degree].iter().enumerate() {
        companion[(i, degree - 1)] = -c / leading;
    }

    Ok(companion)
}

/// Eigenvalues of a square complex matrix.
///
/// Uses nalgebra's Schur decomposition `A = Q T Q*`. For complex input `T`
/// is upper triangular once converged, so the eigenvalues sit on its
/// diagonal; any 2x2 block the solver left coupled is solved directly.
pub fn eigenvalues(matrix: DMatrix<Complex64>) -> Result<Vec<Complex64>, PolyError> {
    let dimension = matrix.nrows();
    let schur = Schur::try_new(matrix, SCHUR_EPS, MAX_SCHUR_ITERATIONS).ok_or(
        PolyError::EigenSolverDiverged {
            dimension,
            max_iterations: MAX_SCHUR_ITERATIONS,
        },
    )?;
    let (_, t) = schur.unpack();
    Ok(quasi_triangular_eigenvalues(&t))
}

fn quasi_triangular_eigenvalues(t: &DMatrix<Complex64>) -> Vec<Complex64> {
    let n = t.nrows();
    let mut out = Vec::with_capacity(n);
    let mut i = 0;

    while i < n {
        let coupled = i + 1 < n && t[(i + 1, i)] != Complex64::new(0.0, 0.0);
        if coupled {
            let (a, b) = block_eigenvalues(t[(i, i)], t[(i, i + 1)], t[(i + 1, i)], t[(i + 1, i + 1)]);
            out.push(a);
            out.push(b);
            i += 2;
        } else {
            out.push(t[(i, i)]);
            i += 1;
        }
    }

    out
}

/// Eigenvalues of `[[h00, h01], [h10, h11]]`.
fn block_eigenvalues(
    h00: Complex64,
    h01: Complex64,
    h10: Complex64,
    h11: Complex64,
) -> (Complex64, Complex64) {
    let half_trace = (h00 + h11) * 0.5;
    let half_diff = (h00 - h11) * 0.5;
    let discr = (half_diff * half_diff + h01 * h10).sqrt();
    (half_trace + discr, half_trace - discr)
}
