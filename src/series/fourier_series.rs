use std::f64::consts::{PI, TAU};

use crate::error::{InputError, Result};
use crate::geometry::{SampleLoop, TimeParametrization};
use crate::math::periodic::periodic_integral;

use super::{Coefficients, CurveCoefficients, CurveEvaluator, FitParams, Terms};

/// Truncated Fourier series approximating a closed 2D curve.
///
/// All numerical work happens in [`FourierSeries::new`]: the samples are
/// parametrized by arc length onto `[0, 2*pi)` and both axes are integrated
/// against every harmonic. The result is immutable; fitting new samples
/// means constructing a new series.
///
/// For harmonic `k` the coefficients are
///
/// ```text
/// constant = 1/(2 pi) * integral x(t) dt
/// cos_k    = 1/pi     * integral x(t) cos(k t) dt
/// sin_k    = 1/pi     * integral x(t) sin(k t) dt
/// ```
///
/// with each integral taken over one period by the periodic trapezoidal rule.
#[derive(Debug, Clone)]
pub struct FourierSeries {
    samples: SampleLoop,
    parametrization: TimeParametrization,
    harmonics: usize,
    coefficients: CurveCoefficients,
}

impl FourierSeries {
    /// Fits a series to the closed loop through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for invalid samples or a zero harmonic count, and
    /// `GeometryError::Degenerate` if all samples coincide.
    pub fn new(xs: &[f64], ys: &[f64], params: FitParams) -> Result<Self> {
        Self::from_samples(SampleLoop::new(xs, ys)?, params)
    }

    /// Fits a series with the default harmonic count.
    ///
    /// # Errors
    ///
    /// See [`FourierSeries::new`].
    pub fn with_default_harmonics(xs: &[f64], ys: &[f64]) -> Result<Self> {
        Self::new(xs, ys, FitParams::default())
    }

    /// Fits a series to an already validated sample loop.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidHarmonicCount` for a zero harmonic count,
    /// and `GeometryError::Degenerate` if all samples coincide.
    pub fn from_samples(samples: SampleLoop, params: FitParams) -> Result<Self> {
        if params.harmonics == 0 {
            return Err(InputError::InvalidHarmonicCount(params.harmonics).into());
        }

        let parametrization = TimeParametrization::new(&samples)?;
        tracing::debug!(
            samples = samples.len(),
            harmonics = params.harmonics,
            perimeter = parametrization.perimeter(),
            "fitting fourier series"
        );

        let times = parametrization.times();
        let coefficients = CurveCoefficients {
            x: axis_coefficients(times, &samples.xs(), params.harmonics),
            y: axis_coefficients(times, &samples.ys(), params.harmonics),
        };

        Ok(Self {
            samples,
            parametrization,
            harmonics: params.harmonics,
            coefficients,
        })
    }

    /// Returns the number of harmonics computed per axis.
    #[must_use]
    pub fn harmonics(&self) -> usize {
        self.harmonics
    }

    /// Returns the fitted samples.
    #[must_use]
    pub fn samples(&self) -> &SampleLoop {
        &self.samples
    }

    /// Returns the time assigned to each sample.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        self.parametrization.times()
    }

    /// Returns the length of the sample loop.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.parametrization.perimeter()
    }

    /// Returns every computed coefficient for both axes.
    #[must_use]
    pub fn full_coefficients(&self) -> &CurveCoefficients {
        &self.coefficients
    }

    /// Returns the first `terms` coefficients for both axes.
    ///
    /// This is a view over the stored coefficients; nothing is recomputed.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::TermCountOutOfRange` if `terms` exceeds the
    /// harmonic count.
    pub fn coefficients(&self, terms: Terms) -> Result<CurveCoefficients> {
        let terms = terms.resolve(self.harmonics)?;
        Ok(self.coefficients.truncated(terms))
    }

    /// Returns `x(t)` and `y(t)` evaluators over the first `terms` harmonics.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::TermCountOutOfRange` if `terms` exceeds the
    /// harmonic count.
    pub fn evaluator(&self, terms: Terms) -> Result<CurveEvaluator> {
        Ok(CurveEvaluator::new(self.coefficients(terms)?))
    }
}

/// Computes one axis' coefficients from values sampled at `times`.
fn axis_coefficients(times: &[f64], values: &[f64], harmonics: usize) -> Coefficients {
    let constant = periodic_integral(times, values) / TAU;

    let mut cos = Vec::with_capacity(harmonics);
    let mut sin = Vec::with_capacity(harmonics);
    let mut cos_f = vec![0.0; values.len()];
    let mut sin_f = vec![0.0; values.len()];
    let mut k = 0.0;
    for _ in 0..harmonics {
        k += 1.0;
        for ((t, v), (c, s)) in times
            .iter()
            .zip(values)
            .zip(cos_f.iter_mut().zip(sin_f.iter_mut()))
        {
            *c = v * (k * t).cos();
            *s = v * (k * t).sin();
        }
        let a = periodic_integral(times, &cos_f) / PI;
        let b = periodic_integral(times, &sin_f) / PI;
        tracing::trace!(harmonic = k, cos = a, sin = b, "harmonic coefficients");
        cos.push(a);
        sin.push(b);
    }

    Coefficients::new(constant, cos, sin)
}
