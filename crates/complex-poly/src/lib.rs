//! complex-poly: look at a random complex polynomial over the complex plane.
//!
//! The crate draws random complex coefficients, evaluates the polynomial on
//! a square grid twice (a naive power sum and a Horner reference), checks
//! that both agree, finds the roots from the companion matrix and renders
//! the real part, imaginary part and log-magnitude of both evaluations as
//! heatmaps with the roots overlaid.
//!
//! Rendering only uses the SVG backend of `plotters`, so no system font or
//! image libraries are required.
pub mod analysis;
pub mod coefficients;
pub mod components;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod math;
pub mod report;

pub use analysis::Analysis;
pub use config::PlotConfig;
pub use error::PolyError;
