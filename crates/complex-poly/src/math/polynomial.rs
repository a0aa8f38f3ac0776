use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::PolyError;
use crate::math::companion::{companion_matrix, eigenvalues};

/// Offsets, relative to the Cauchy root bound, tried when the Schur
/// iteration stalls on the unshifted companion matrix (e.g. `z^n - 1`).
const RETRY_SHIFTS: [(f64, f64); 3] = [(0.1, 0.05), (-0.2, 0.15), (0.3, -0.25)];

/// A complex polynomial `p(z) = c_0 + c_1 z + ... + c_n z^n`, coefficients
/// stored in ascending power order.
///
/// This is the reference evaluator the naive power sum in
/// [`crate::evaluate`] is checked against.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Array1<Complex64>,
}

impl Polynomial {
    pub fn new(coeffs: Array1<Complex64>) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    pub fn from_vec(coeffs: Vec<Complex64>) -> Result<Self, PolyError> {
        Self::new(Array1::from_vec(coeffs))
    }

    pub fn coeffs(&self) -> &Array1<Complex64> {
        &self.coeffs
    }

    /// Index of the highest non-zero coefficient (0 for the zero polynomial).
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| *c != Complex64::new(0.0, 0.0))
            .unwrap_or(0)
    }

    /// Copy with trailing zero coefficients removed. Always keeps `c_0`.
    pub fn trimmed(&self) -> Polynomial {
        let len = self.degree() + 1;
        Polynomial {
            coeffs: self.coeffs.slice(ndarray::s![..len]).to_owned(),
        }
    }

    /// Evaluate at a single point with Horner's method.
    ///
    /// ```text
    /// result = c_n
    /// for i in (n-1)..=0:
    ///     result = result * z + c_i
    /// ```
    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }

    pub fn eval_grid(&self, points: &Array2<Complex64>) -> Array2<Complex64> {
        points.mapv(|z| self.eval(z))
    }

    /// Coefficients of `q(w) = p(w + s)`.
    pub fn shifted(&self, s: Complex64) -> Polynomial {
        // repeated synthetic division on the descending coefficients
        let mut b: Vec<Complex64> = self.coeffs.iter().rev().copied().collect();
        let n = b.len() - 1;
        for i in 0..n {
            for j in 1..=n - i {
                let prev = b[j - 1];
                b[j] += s * prev;
            }
        }
        b.reverse();
        Polynomial {
            coeffs: Array1::from_vec(b),
        }
    }

    /// `1 + max_k |c_k / c_n|`; every root lies within this radius.
    pub fn cauchy_bound(&self) -> f64 {
        let trimmed = self.trimmed();
        let n = trimmed.coeffs.len() - 1;
        let leading = trimmed.coeffs[n];
        1.0 + trimmed
            .coeffs
            .iter()
            .take(n)
            .map(|c| (c / leading).norm())
            .fold(0.0, f64::max)
    }

    /// All complex roots, sorted by real part and then imaginary part.
    ///
    /// Constants have no roots and linear polynomials are solved directly.
    /// A vanishing low-order block `c_0 = ... = c_{k-1} = 0` contributes `k`
    /// roots at exactly zero. Higher degrees use the eigenvalues of the
    /// companion matrix.
    pub fn roots(&self) -> Result<Vec<Complex64>, PolyError> {
        let trimmed = self.trimmed();
        let c = trimmed.coeffs.to_vec();

        // c_0 = ... = c_{k-1} = 0 factors out z^k: k exact roots at the origin
        let zeros = c
            .iter()
            .take(c.len().saturating_sub(1))
            .take_while(|v| **v == Complex64::new(0.0, 0.0))
            .count();
        let deflated = Polynomial {
            coeffs: Array1::from_vec(c[zeros..].to_vec()),
        };
        let c = &c[zeros..];

        let mut roots = vec![Complex64::new(0.0, 0.0); zeros];
        match c.len() {
            0 | 1 => {}
            2 => roots.push(-c[0] / c[1]),
            _ => match eigenvalues(companion_matrix(c)?) {
                Ok(found) => roots.extend(found),
                Err(err) => roots.extend(deflated.shifted_roots(err)?),
            },
        }

        sort_roots(&mut roots);
        Ok(roots)
    }

    // Retry on a Taylor-shifted copy; the shift moves the companion matrix
    // away from the cyclic structure the unshifted QR sweep cannot break.
    fn shifted_roots(&self, first_err: PolyError) -> Result<Vec<Complex64>, PolyError> {
        let radius = self.cauchy_bound();
        let mut last_err = first_err;
        for (re, im) in RETRY_SHIFTS {
            let s = Complex64::new(re, im) * radius;
            log::warn!("{}; retrying with the variable shifted by {}", last_err, s);
            let q = self.shifted(s);
            match eigenvalues(companion_matrix(&q.coeffs.to_vec())?) {
                Ok(roots) => return Ok(roots.into_iter().map(|w| w + s).collect()),
                Err(err) => last_err = err,
            }
        }
        Err(last_err)
    }

    /// `|p(r)|` for each root, a cheap check on root quality.
    pub fn residuals(&self, roots: &[Complex64]) -> Vec<f64> {
        roots.iter().map(|&r| self.eval(r).norm()).collect()
    }
}

/// Real parts closer than this, relative to the root magnitudes, count as
/// equal when ordering roots.
const ROOT_ORDER_TOL: f64 = 1e-9;

/// Sort roots by real part, then imaginary part.
///
/// Neighbouring real parts within `ROOT_ORDER_TOL * max(1, |z|)` of the first
/// root of their run form one tie group, ordered by imaginary part, so
/// rounding noise in the eigenvalues (e.g. `-1.8e-15 + 2i` for `2i`) does not
/// decide the order.
pub fn sort_roots(roots: &mut [Complex64]) {
    roots.sort_by(|a, b| a.re.total_cmp(&b.re));

    let mut start = 0;
    while start < roots.len() {
        let anchor = roots[start];
        let mut end = start + 1;
        while end < roots.len() {
            let scale = 1.0f64.max(anchor.norm()).max(roots[end].norm());
            if (roots[end].re - anchor.re).abs() > ROOT_ORDER_TOL * scale {
                break;
            }
            end += 1;
        }
        roots[start..end].sort_by(|a, b| a.im.total_cmp(&b.im));
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_ignores_trailing_zeros() {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let p = Polynomial::from_vec(vec![one, one, zero, zero]).unwrap();
        assert_eq!(p.degree(), 1);
        assert_eq!(p.trimmed().coeffs().len(), 2);

        let z = Polynomial::from_vec(vec![zero, zero]).unwrap();
        assert_eq!(z.degree(), 0);
        assert_eq!(z.trimmed().coeffs().len(), 1);
    }

    #[test]
    fn test_shifted_matches_original() {
        let p = Polynomial::from_vec(vec![
            Complex64::new(1.0, -2.0),
            Complex64::new(0.5, 0.0),
            Complex64::new(-3.0, 1.0),
            Complex64::new(0.0, 2.0),
        ])
        .unwrap();
        let s = Complex64::new(0.3, -0.7);
        let q = p.shifted(s);
        for w in [Complex64::new(0.0, 0.0), Complex64::new(1.5, 2.0), Complex64::new(-0.4, 0.9)] {
            assert!((q.eval(w) - p.eval(w + s)).norm() < 1e-12);
        }
    }

    #[test]
    fn test_cauchy_bound() {
        // z^2 - 4: roots +-2, bound 1 + 4
        let p = Polynomial::from_vec(vec![
            Complex64::new(-4.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(p.cauchy_bound(), 5.0);
    }

    #[test]
    fn test_sort_roots_ignores_rounding_in_real_part() {
        let mut roots = vec![
            Complex64::new(-1.7763568394002505e-15, 2.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(3.0e-16, -2.0),
            Complex64::new(-1.0, 0.0),
        ];
        sort_roots(&mut roots);
        assert_eq!(roots[0], Complex64::new(-1.0, 0.0));
        assert_eq!(roots[1].im, -2.0);
        assert_eq!(roots[2].im, 2.0);
        assert_eq!(roots[3], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_horner_constant() {
        let p = Polynomial::from_vec(vec![Complex64::new(2.0, -1.0)]).unwrap();
        assert_eq!(p.eval(Complex64::new(100.0, 3.0)), Complex64::new(2.0, -1.0));
    }
}
