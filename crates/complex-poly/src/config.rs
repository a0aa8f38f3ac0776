use serde::{Deserialize, Serialize};

use crate::error::PolyError;

/// Central configuration for a single polynomial run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of coefficients `c_0..c_{N-1}`. The polynomial degree is `N - 1`.
    pub num_coeffs: usize,
    /// Grid points per axis.
    pub image_res: usize,
    /// Enlarge the plotted domain by this factor beyond the furthest root.
    pub wiggle_room: f64,
    pub seed: u64,
    /// Heatmap cells per axis in the rendered figure.
    pub render_res: usize,
    pub figure_size: (u32, u32),
    pub figure_file: String,
    pub report_file: String,
    /// Open the report in the default browser once it is written.
    pub show_report: bool,
    pub rtol: f64,
    pub atol: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            num_coeffs: 10,
            image_res: 1024,
            wiggle_room: 0.5,
            seed: 0,
            render_res: 128,
            figure_size: (1800, 1000),
            figure_file: "complex_poly_roots.svg".to_string(),
            report_file: "complex_poly_report.html".to_string(),
            show_report: true,
            rtol: 1e-7,
            atol: 1e-8,
        }
    }
}

impl PlotConfig {
    pub fn new(num_coeffs: usize, image_res: usize, seed: u64) -> Self {
        Self {
            num_coeffs,
            image_res,
            seed,
            render_res: image_res.min(PlotConfig::default().render_res),
            ..Default::default()
        }
    }

    /// Check that the configuration describes a drawable, solvable run.
    pub fn validate(&self) -> Result<(), PolyError> {
        if self.num_coeffs == 0 {
            return Err(PolyError::InvalidConfig(
                "num_coeffs must be at least 1".to_string(),
            ));
        }
        if self.image_res < 2 {
            return Err(PolyError::InvalidConfig(format!(
                "image_res must be at least 2, got {}",
                self.image_res
            )));
        }
        if self.render_res < 2 || self.render_res > self.image_res {
            return Err(PolyError::InvalidConfig(format!(
                "render_res must lie in [2, image_res = {}], got {}",
                self.image_res, self.render_res
            )));
        }
        if !self.wiggle_room.is_finite() || self.wiggle_room < 0.0 {
            return Err(PolyError::InvalidConfig(format!(
                "wiggle_room must be a non-negative finite number, got {}",
                self.wiggle_room
            )));
        }
        if !(self.rtol >= 0.0 && self.atol >= 0.0) {
            return Err(PolyError::InvalidConfig(format!(
                "tolerances must be non-negative, got rtol={} atol={}",
                self.rtol, self.atol
            )));
        }
        if self.figure_size.0 == 0 || self.figure_size.1 == 0 {
            return Err(PolyError::InvalidConfig(format!(
                "figure_size must be non-zero, got {:?}",
                self.figure_size
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, PolyError> {
        serde_json::to_string_pretty(self).map_err(|e| PolyError::InvalidConfig(e.to_string()))
    }
}
