use crate::error::Result;
use crate::series::{Coefficients, FourierSeries, Terms};

use super::ExportParams;

/// Renders a series as one flat numeric list.
///
/// For `n` terms the layout is
///
/// ```text
/// [cx, ax_1..ax_n, px_1..px_n, cy, ay_1..ay_n, py_1..py_n]
/// ```
///
/// where `c` is the constant, `a` the amplitudes and `p` the phases, giving
/// `2(2n+1)` numbers. See [`super::LIST_RECONSTRUCTION_FORMULA`] and
/// [`super::PolarSeries`] for the inverse.
pub struct CoefficientList<'a> {
    series: &'a FourierSeries,
    params: ExportParams,
}

impl<'a> CoefficientList<'a> {
    /// Creates a new `CoefficientList` export with default parameters.
    #[must_use]
    pub fn new(series: &'a FourierSeries) -> Self {
        Self {
            series,
            params: ExportParams::default(),
        }
    }

    /// Sets custom export parameters.
    #[must_use]
    pub fn with_params(mut self, params: ExportParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the rounded list values for the first `terms` harmonics.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::TermCountOutOfRange` if `terms` exceeds the
    /// series' harmonic count.
    pub fn values(&self, terms: Terms) -> Result<Vec<f64>> {
        let coefficients = self.series.coefficients(terms)?;
        let (mut x, y) = coefficients.map_axes(|c| self.axis(c));
        x.extend(y);
        Ok(x)
    }

    /// Executes the export over the first `terms` harmonics.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::TermCountOutOfRange` if `terms` exceeds the
    /// series' harmonic count.
    pub fn execute(&self, terms: Terms) -> Result<String> {
        let body = self
            .values(terms)?
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Ok(self.params.style.list(&body))
    }

    fn axis(&self, coefficients: &Coefficients) -> Vec<f64> {
        let polar = coefficients.polar_terms();
        let mut values = Vec::with_capacity(2 * polar.len() + 1);
        values.push(self.params.round(coefficients.constant));
        values.extend(polar.iter().map(|p| self.params.round(p.amplitude)));
        values.extend(polar.iter().map(|p| self.params.round(p.phase)));
        values
    }
}
