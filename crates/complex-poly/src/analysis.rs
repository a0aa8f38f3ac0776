//! The end-to-end data flow: coefficients in, evaluations and roots out.

use std::time::Instant;

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::coefficients::random_coefficients;
use crate::config::PlotConfig;
use crate::error::PolyError;
use crate::evaluate::{compare, evaluate_power_sum, EvaluationDiff};
use crate::math::{domain_extent, ComplexGrid, Polynomial};

/// Everything produced by one run, ready to be plotted or reported.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub config: PlotConfig,
    pub polynomial: Polynomial,
    pub roots: Vec<Complex64>,
    pub residuals: Vec<f64>,
    pub grid: ComplexGrid,
    /// Power-sum evaluation `f(z)`.
    pub manual: Array2<Complex64>,
    /// Horner evaluation `p(z)`.
    pub reference: Array2<Complex64>,
    pub diff: EvaluationDiff,
}

impl Analysis {
    /// Draw random coefficients from `config` and analyse them.
    pub fn run(config: &PlotConfig) -> Result<Self, PolyError> {
        config.validate()?;
        let coeffs = random_coefficients(config.num_coeffs, config.seed);
        log::info!(
            "Drew {} complex coefficients (seed {})",
            coeffs.len(),
            config.seed
        );
        Self::from_coefficients(config, coeffs)
    }

    /// Analyse a given set of coefficients (ascending power order).
    pub fn from_coefficients(
        config: &PlotConfig,
        coeffs: Array1<Complex64>,
    ) -> Result<Self, PolyError> {
        config.validate()?;
        let polynomial = Polynomial::new(coeffs)?;
        log::debug!("Coefficients: {:?}", polynomial.coeffs());

        let start_time = Instant::now();
        let roots = polynomial.roots()?;
        let residuals = polynomial.residuals(&roots);
        log::info!(
            "Found {} roots of a degree {} polynomial in {:?}",
            roots.len(),
            polynomial.degree(),
            start_time.elapsed()
        );
        for (root, residual) in roots.iter().zip(&residuals) {
            log::debug!("root {:.6} {:+.6}i  |p(r)| = {:.3e}", root.re, root.im, residual);
        }

        let extent = domain_extent(&roots, config.wiggle_room);
        let grid = ComplexGrid::new(extent, config.image_res);
        log::info!(
            "Sampling [-{e:.4}, {e:.4}]^2 on a {n}x{n} grid",
            e = extent,
            n = config.image_res
        );

        let start_time = Instant::now();
        let manual = evaluate_power_sum(polynomial.coeffs(), grid.points());
        log::debug!("Power-sum evaluation took {:?}", start_time.elapsed());

        let start_time = Instant::now();
        let reference = polynomial.eval_grid(grid.points());
        log::debug!("Horner evaluation took {:?}", start_time.elapsed());

        let diff = compare(&manual, &reference)?;
        log::info!(
            "Evaluator difference: max |f - p| = {:.3e}, max relative = {:.3e} at {:?}",
            diff.max_abs,
            diff.max_rel,
            diff.worst_index
        );

        let analysis = Self {
            config: config.clone(),
            polynomial,
            roots,
            residuals,
            grid,
            manual,
            reference,
            diff,
        };
        if !analysis.evaluations_agree() {
            log::warn!(
                "Power-sum and Horner evaluations disagree beyond rtol={} atol={}",
                config.rtol,
                config.atol
            );
        }
        Ok(analysis)
    }

    /// Whether `f` and `p` agree within the configured tolerances.
    pub fn evaluations_agree(&self) -> bool {
        self.diff.allclose(self.config.rtol, self.config.atol)
    }

    pub fn coefficients(&self) -> &Array1<Complex64> {
        self.polynomial.coeffs()
    }
}
