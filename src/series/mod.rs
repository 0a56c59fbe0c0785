mod coefficients;
mod evaluator;
mod fourier_series;
mod polar;
mod terms;

pub use coefficients::{Coefficients, CurveCoefficients};
pub use evaluator::{AxisEvaluator, CurveEvaluator};
pub use fourier_series::FourierSeries;
pub use polar::PolarTerm;
pub use terms::Terms;

/// Default number of harmonics computed per axis.
pub const DEFAULT_HARMONICS: usize = 30;

/// Parameters controlling a Fourier-series fit.
#[derive(Debug, Clone, Copy)]
pub struct FitParams {
    /// Number of harmonics computed per axis. Must be at least 1.
    pub harmonics: usize,
}

impl FitParams {
    /// Creates fit parameters with the given harmonic count.
    #[must_use]
    pub fn new(harmonics: usize) -> Self {
        Self { harmonics }
    }
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            harmonics: DEFAULT_HARMONICS,
        }
    }
}
