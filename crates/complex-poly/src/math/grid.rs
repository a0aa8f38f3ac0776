//! The square sampling grid over the complex plane.

use itertools_num::linspace;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// Half-width of the square domain `[-e, e] x [-e, e]` that holds every root.
///
/// The furthest root coordinate (real or imaginary, in absolute value) is
/// scaled by `1 + wiggle_room`. Without a usable root the unit square is
/// scaled instead.
pub fn domain_extent(roots: &[Complex64], wiggle_room: f64) -> f64 {
    let furthest = roots
        .iter()
        .flat_map(|r| [r.re.abs(), r.im.abs()])
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);

    let base = if furthest > 0.0 { furthest } else { 1.0 };
    (1.0 + wiggle_room) * base
}

/// Evenly spaced complex sample points.
///
/// `points[[i, j]] = axis[i] + i * axis[j]`: the row index walks the real
/// axis and the column index walks the imaginary axis.
#[derive(Clone, Debug)]
pub struct ComplexGrid {
    extent: f64,
    axis: Array1<f64>,
    points: Array2<Complex64>,
}

impl ComplexGrid {
    pub fn new(extent: f64, resolution: usize) -> Self {
        let axis: Array1<f64> = linspace(-extent, extent, resolution).collect();
        let points = Array2::from_shape_fn((resolution, resolution), |(i, j)| {
            Complex64::new(axis[i], axis[j])
        });
        Self {
            extent,
            axis,
            points,
        }
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn resolution(&self) -> usize {
        self.axis.len()
    }

    pub fn axis(&self) -> &Array1<f64> {
        &self.axis
    }

    pub fn points(&self) -> &Array2<Complex64> {
        &self.points
    }

    /// `n` evenly spread axis indices, first and last included.
    ///
    /// Used to thin the grid out when drawing; `n` is clamped to the grid
    /// resolution.
    pub fn sample_indices(&self, n: usize) -> Vec<usize> {
        let len = self.resolution();
        let n = n.min(len);
        if n <= 1 {
            return vec![0; n];
        }
        let step = (len - 1) as f64 / (n - 1) as f64;
        (0..n).map(|k| (k as f64 * step).round() as usize).collect()
    }
}
