use crate::error::{ExportError, Result};
use crate::math::Point2;
use crate::series::{Coefficients, CurveCoefficients, PolarTerm};

/// Graphing-calculator formula that draws a curve from a flat coefficient
/// list `F_S` produced by [`super::CoefficientList`].
pub const LIST_RECONSTRUCTION_FORMULA: &str = r"D_{raw}\left(F_{S}\right)=\left(F_{S}\left[1\right]+\operatorname{total}\left(F_{S}\left[2...\frac{\operatorname{length}\left(F_{S}\right)+2}{4}\right]\cos\left(\left[1...\frac{\operatorname{length}\left(F_{S}\right)-2}{4}\right]t+F_{S}\left[\frac{\operatorname{length}\left(F_{S}\right)-2}{4}+2...\frac{\operatorname{length}\left(F_{S}\right)}{2}\right]\right)\right),F_{S}\left[\frac{\operatorname{length}\left(F_{S}\right)+2}{2}\right]+\operatorname{total}\left(F_{S}\left[\frac{\operatorname{length}\left(F_{S}\right)+4}{2}...\frac{3\operatorname{length}\left(F_{S}\right)+2}{4}\right]\cos\left(\left[1...\frac{\operatorname{length}\left(F_{S}\right)-2}{4}\right]t+F_{S}\left[\frac{3\operatorname{length}\left(F_{S}\right)+6}{4}...\operatorname{length}\left(F_{S}\right)\right]\right)\right)\right)";

/// Parses a flat coefficient list in either export style.
///
/// Accepts `[a,b,...]` and `\left[a,b,...\right]`, with optional whitespace.
///
/// # Errors
///
/// Returns `ExportError::Parse` if the brackets are missing or an entry is
/// not a number.
pub fn parse_coefficient_list(text: &str) -> Result<Vec<f64>> {
    let text = text.trim();
    let body = text
        .strip_prefix("\\left[")
        .and_then(|s| s.strip_suffix("\\right]"))
        .or_else(|| text.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
        .ok_or_else(|| ExportError::Parse(format!("expected a bracketed list, got {text:?}")))?;

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values = body
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .map_err(|e| ExportError::Parse(format!("invalid number {entry:?}: {e}")))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(values)
}

/// One axis of a series in amplitude/phase form.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarAxis {
    /// The constant term.
    pub constant: f64,
    /// Harmonics `1..=n`.
    pub terms: Vec<PolarTerm>,
}

impl PolarAxis {
    fn from_layout(values: &[f64], harmonics: usize) -> Self {
        let amplitudes = &values[1..=harmonics];
        let phases = &values[harmonics + 1..=2 * harmonics];
        let terms = amplitudes
            .iter()
            .zip(phases)
            .enumerate()
            .map(|(i, (&a, &p))| PolarTerm::new(i + 1, a, p))
            .collect();
        Self {
            constant: values[0],
            terms,
        }
    }

    /// Evaluates the axis at time `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.constant + self.terms.iter().map(|p| p.evaluate(t)).sum::<f64>()
    }

    /// Converts back to cosine/sine coefficients.
    #[must_use]
    pub fn to_coefficients(&self) -> Coefficients {
        let (cos, sin) = self.terms.iter().map(PolarTerm::to_cos_sin).unzip();
        Coefficients::new(self.constant, cos, sin)
    }
}

/// A curve rebuilt from a flat coefficient list.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarSeries {
    /// The x-axis.
    pub x: PolarAxis,
    /// The y-axis.
    pub y: PolarAxis,
}

impl PolarSeries {
    /// Splits a flat list laid out as by [`super::CoefficientList`].
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MalformedList` unless the length is `2(2n+1)`
    /// for some `n`.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        let len = values.len();
        if len < 2 || len % 4 != 2 {
            return Err(ExportError::MalformedList { len }.into());
        }
        let half = len / 2;
        let harmonics = (half - 1) / 2;
        Ok(Self {
            x: PolarAxis::from_layout(&values[..half], harmonics),
            y: PolarAxis::from_layout(&values[half..], harmonics),
        })
    }

    /// Returns the number of harmonics per axis.
    #[must_use]
    pub fn harmonics(&self) -> usize {
        self.x.terms.len()
    }

    /// Evaluates the curve point at time `t`.
    #[must_use]
    pub fn point(&self, t: f64) -> Point2 {
        Point2::new(self.x.evaluate(t), self.y.evaluate(t))
    }

    /// Converts back to cosine/sine coefficients.
    #[must_use]
    pub fn to_coefficients(&self) -> CurveCoefficients {
        CurveCoefficients {
            x: self.x.to_coefficients(),
            y: self.y.to_coefficients(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use crate::export::{CoefficientList, ExportParams, FormulaStyle};
    use crate::series::{CurveEvaluator, FitParams, FourierSeries, Terms};
    use approx::assert_abs_diff_eq;

    #[test]
    fn parses_both_styles() {
        assert_eq!(parse_coefficient_list("[1,-2.5,0]").unwrap(), vec![1.0, -2.5, 0.0]);
        assert_eq!(
            parse_coefficient_list(" \\left[ 1, 2 \\right] ").unwrap(),
            vec![1.0, 2.0]
        );
        assert!(parse_coefficient_list("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_text() {
        assert!(matches!(
            parse_coefficient_list("1,2"),
            Err(CurveError::Export(ExportError::Parse(_)))
        ));
        assert!(parse_coefficient_list("[1,x]").is_err());
        assert!(parse_coefficient_list("[1,,2]").is_err());
    }

    #[test]
    fn layout_is_split_per_axis() {
        let values = [5.0, 1.0, 2.0, 0.1, 0.2, -3.0, 4.0, 6.0, 0.3, 0.4];
        let p = PolarSeries::from_flat(&values).unwrap();
        assert_eq!(p.harmonics(), 2);
        assert_abs_diff_eq!(p.x.constant, 5.0);
        assert_eq!(p.x.terms[1], PolarTerm::new(2, 2.0, 0.2));
        assert_abs_diff_eq!(p.y.constant, -3.0);
        assert_eq!(p.y.terms[0], PolarTerm::new(1, 4.0, 0.3));
    }

    #[test]
    fn rejects_malformed_length() {
        for len in [0, 1, 3, 4, 5, 8] {
            let values = vec![0.0; len];
            assert!(matches!(
                PolarSeries::from_flat(&values),
                Err(CurveError::Export(ExportError::MalformedList { .. }))
            ));
        }
        assert_eq!(PolarSeries::from_flat(&[1.0, 2.0]).unwrap().harmonics(), 0);
    }

    #[test]
    fn exported_list_redraws_the_curve() {
        let xs = [0.0, 3.0, 5.0, 4.0, 1.0, -1.0];
        let ys = [0.0, -1.0, 1.0, 4.0, 5.0, 2.0];
        let fs = FourierSeries::new(&xs, &ys, FitParams::new(10)).unwrap();
        let params = ExportParams {
            decimals: 8,
            style: FormulaStyle::Latex,
        };
        let text = CoefficientList::new(&fs)
            .with_params(params)
            .execute(Terms::All)
            .unwrap();
        let polar = PolarSeries::from_flat(&parse_coefficient_list(&text).unwrap()).unwrap();
        let exact = fs.evaluator(Terms::All).unwrap();
        let rebuilt = CurveEvaluator::new(polar.to_coefficients());
        for i in 0..50 {
            let t = f64::from(i) * 0.13;
            let (a, b) = (exact.point(t), polar.point(t));
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
            assert_abs_diff_eq!(rebuilt.x(t), b.x, epsilon = 1e-9);
        }
    }

    #[test]
    fn formula_mentions_list_length() {
        assert!(LIST_RECONSTRUCTION_FORMULA.starts_with("D_{raw}"));
        assert!(LIST_RECONSTRUCTION_FORMULA.contains("\\operatorname{length}"));
    }
}
