//! Numerical building blocks: the sampling grid, the reference polynomial
//! evaluator and the companion-matrix root finder.
pub mod companion;
pub mod grid;
pub mod polynomial;

pub use grid::{domain_extent, ComplexGrid};
pub use polynomial::Polynomial;
