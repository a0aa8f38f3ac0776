use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised while building, solving or rendering a polynomial.
#[derive(Debug)]
pub enum PolyError {
    InvalidConfig(String),
    EmptyCoefficients,
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    EigenSolverDiverged {
        dimension: usize,
        max_iterations: usize,
    },
    DegenerateCompanion {
        num_coeffs: usize,
    },
    Render(String),
    Viewer(String),
    Io(io::Error),
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolyError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PolyError::EmptyCoefficients => write!(f, "A polynomial needs at least one coefficient"),
            PolyError::ShapeMismatch { expected, found } => write!(
                f,
                "Grid shape mismatch: expected {:?}, found {:?}",
                expected, found
            ),
            PolyError::EigenSolverDiverged { dimension, max_iterations } => write!(
                f,
                "Schur decomposition of the {}x{} companion matrix did not converge within {} iterations",
                dimension, dimension, max_iterations
            ),
            PolyError::DegenerateCompanion { num_coeffs } => write!(
                f,
                "A companion matrix needs at least two coefficients and a non-zero leading one, got {} coefficients",
                num_coeffs
            ),
            PolyError::Render(msg) => write!(f, "Failed to render figure: {}", msg),
            PolyError::Viewer(msg) => write!(f, "Failed to open the report viewer: {}", msg),
            PolyError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for PolyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PolyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PolyError {
    fn from(err: io::Error) -> Self {
        PolyError::Io(err)
    }
}
