use crate::error::Result;
use crate::series::{Coefficients, FourierSeries, Terms};

use super::ExportParams;

/// Renders a series as a parametric `(x(t), y(t))` formula string.
///
/// Each axis is written as its constant followed by one
/// `amplitude\cos(2π·k t+phase)` term per harmonic, joined with `+`.
pub struct ExpandedFormula<'a> {
    series: &'a FourierSeries,
    params: ExportParams,
}

impl<'a> ExpandedFormula<'a> {
    /// Creates a new `ExpandedFormula` export with default parameters.
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

    /// Executes the export over the first `terms` harmonics.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::TermCountOutOfRange` if `terms` exceeds the
    /// series' harmonic count.
    pub fn execute(&self, terms: Terms) -> Result<String> {
        let coefficients = self.series.coefficients(terms)?;
        let (x, y) = coefficients.map_axes(|c| self.axis(c));
        Ok(self.params.style.pair(&x, &y))
    }

    fn axis(&self, coefficients: &Coefficients) -> String {
        let mut parts = Vec::with_capacity(coefficients.harmonics() + 1);
        parts.push(self.params.round(coefficients.constant).to_string());
        for term in coefficients.polar_terms() {
            parts.push(self.params.style.cosine(
                self.params.round(term.amplitude),
                term.harmonic,
                self.params.round(term.phase),
            ));
        }
        parts.join("+")
    }
}
