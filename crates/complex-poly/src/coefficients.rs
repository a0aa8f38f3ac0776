//! Random coefficient generation.

use ndarray::Array1;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Draw `num_coeffs` complex coefficients with standard-normal real and
/// imaginary parts.
///
/// All real parts are drawn first, then all imaginary parts, from a single
/// `StdRng` seeded with `seed`, so the same seed always yields the same
/// polynomial.
pub fn random_coefficients(num_coeffs: usize, seed: u64) -> Array1<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let re: Vec<f64> = (0..num_coeffs).map(|_| StandardNormal.sample(&mut rng)).collect();
    let im: Vec<f64> = (0..num_coeffs).map(|_| StandardNormal.sample(&mut rng)).collect();

    re.into_iter()
        .zip(im)
        .map(|(re, im)| Complex64::new(re, im))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_coefficients() {
        let a = random_coefficients(10, 0);
        let b = random_coefficients(10, 0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_different_seed_different_coefficients() {
        let a = random_coefficients(10, 0);
        let b = random_coefficients(10, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_coefficients() {
        assert!(random_coefficients(0, 3).is_empty());
    }
}
