//! Text forms of a fitted series for external graphing tools.
//!
//! Every harmonic is written in amplitude/phase form and every number is
//! rounded to [`ExportParams::decimals`] places. Rounding happens only here;
//! the coefficients held by a [`crate::series::FourierSeries`] are untouched.

mod coefficient_list;
mod expanded_formula;
mod reconstruct;

pub use coefficient_list::CoefficientList;
pub use expanded_formula::ExpandedFormula;
pub use reconstruct::{parse_coefficient_list, PolarAxis, PolarSeries, LIST_RECONSTRUCTION_FORMULA};

use crate::math::rounding::round_to;

/// Default number of decimal places kept in exported numbers.
pub const DEFAULT_DECIMALS: u32 = 4;

/// Delimiter style of the exported text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormulaStyle {
    /// `(x,y)` pairs, `\cos(2π·kt+p)` terms and `[a,b,...]` lists.
    #[default]
    Plain,
    /// Graphing-calculator LaTeX: `\left(x,y\right)`,
    /// `\cos\left(2\pi\cdot kt+p\right)` and `\left[a,b,...\right]`.
    Latex,
}

impl FormulaStyle {
    fn pair(self, x: &str, y: &str) -> String {
        match self {
            Self::Plain => format!("({x},{y})"),
            Self::Latex => format!("\\left({x},{y}\\right)"),
        }
    }

    fn cosine(self, amplitude: f64, harmonic: usize, phase: f64) -> String {
        match self {
            Self::Plain => format!("{amplitude}\\cos(2π·{harmonic}t+{phase})"),
            Self::Latex => {
                format!("{amplitude}\\cos\\left(2\\pi\\cdot{harmonic}t+{phase}\\right)")
            }
        }
    }

    fn list(self, body: &str) -> String {
        match self {
            Self::Plain => format!("[{body}]"),
            Self::Latex => format!("\\left[{body}\\right]"),
        }
    }
}

/// Parameters controlling exported text.
#[derive(Debug, Clone, Copy)]
pub struct ExportParams {
    /// Decimal places kept in every number.
    pub decimals: u32,
    /// Delimiter style.
    pub style: FormulaStyle,
}

impl ExportParams {
    fn round(&self, x: f64) -> f64 {
        round_to(x, self.decimals)
    }
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            style: FormulaStyle::Plain,
        }
    }
}
