//! Real-valued views of a complex evaluation, one per figure column.

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Which evaluator produced a grid. Row 1 of the figure is `Manual`, row 2
/// `Reference`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    Manual,
    Reference,
}

impl Evaluator {
    pub const ALL: [Evaluator; 2] = [Evaluator::Manual, Evaluator::Reference];

    /// Function letter used in labels: `f` for the power sum, `p` for Horner.
    pub fn symbol(&self) -> &'static str {
        match self {
            Evaluator::Manual => "f",
            Evaluator::Reference => "p",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Real,
    Imag,
    LnAbs,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Real, Component::Imag, Component::LnAbs];

    /// `ln|0|` is `-inf`; callers decide how to colour it.
    pub fn apply(&self, z: Complex64) -> f64 {
        match self {
            Component::Real => z.re,
            Component::Imag => z.im,
            Component::LnAbs => z.norm().ln(),
        }
    }

    pub fn map(&self, values: &Array2<Complex64>) -> Array2<f64> {
        values.mapv(|z| self.apply(z))
    }

    pub fn label(&self, evaluator: Evaluator) -> String {
        let f = evaluator.symbol();
        match self {
            Component::Real => format!("Re({}(z))", f),
            Component::Imag => format!("Im({}(z))", f),
            Component::LnAbs => format!("ln|{}(z)|", f),
        }
    }
}

/// Min and max over the finite values of `values`.
///
/// Falls back to `(-1, 1)` when nothing is finite and widens a flat range
/// by 0.5 on each side so a colour scale can still be drawn.
pub fn value_range<'a, I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a f64>,
{
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        (-1.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}
