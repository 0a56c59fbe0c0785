use super::PolarTerm;

/// Fourier coefficients of one coordinate axis.
///
/// Represents `constant + sum_k (cos[k-1] * cos(k t) + sin[k-1] * sin(k t))`
/// for `k = 1..=harmonics()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    /// The constant (mean) term.
    pub constant: f64,
    /// Cosine coefficients for harmonics `1..=n`.
    pub cos: Vec<f64>,
    /// Sine coefficients for harmonics `1..=n`.
    pub sin: Vec<f64>,
}

impl Coefficients {
    /// Creates a coefficient set. `cos` and `sin` must have equal length.
    #[must_use]
    pub fn new(constant: f64, cos: Vec<f64>, sin: Vec<f64>) -> Self {
        debug_assert_eq!(cos.len(), sin.len());
        Self { constant, cos, sin }
    }

    /// Returns the number of harmonics held.
    #[must_use]
    pub fn harmonics(&self) -> usize {
        self.cos.len().min(self.sin.len())
    }

    /// Returns a copy holding only the first `terms` harmonics.
    ///
    /// `terms` is clamped to the number held; callers validate counts through
    /// [`super::Terms::resolve`].
    #[must_use]
    pub(crate) fn truncated(&self, terms: usize) -> Self {
        let terms = terms.min(self.harmonics());
        Self {
            constant: self.constant,
            cos: self.cos[..terms].to_vec(),
            sin: self.sin[..terms].to_vec(),
        }
    }

    /// Evaluates the series at time `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let mut k = 0.0;
        let mut value = self.constant;
        for (a, b) in self.cos.iter().zip(&self.sin) {
            k += 1.0;
            value += a * (k * t).cos() + b * (k * t).sin();
        }
        value
    }

    /// Returns every harmonic in amplitude/phase form.
    #[must_use]
    pub fn polar_terms(&self) -> Vec<PolarTerm> {
        self.cos
            .iter()
            .zip(&self.sin)
            .enumerate()
            .map(|(i, (&a, &b))| PolarTerm::from_cos_sin(i + 1, a, b))
            .collect()
    }
}

/// Coefficient sets for both axes of a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveCoefficients {
    /// Coefficients of `x(t)`.
    pub x: Coefficients,
    /// Coefficients of `y(t)`.
    pub y: Coefficients,
}

impl CurveCoefficients {
    /// Applies `f` to each axis, x first, and returns both results.
    pub fn map_axes<T>(&self, mut f: impl FnMut(&Coefficients) -> T) -> (T, T) {
        let x = f(&self.x);
        let y = f(&self.y);
        (x, y)
    }

    /// Returns a copy holding only the first `terms` harmonics per axis.
    #[must_use]
    pub(crate) fn truncated(&self, terms: usize) -> Self {
        let (x, y) = self.map_axes(|c| c.truncated(terms));
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn sample() -> Coefficients {
        Coefficients::new(1.5, vec![2.0, 0.5, -0.25], vec![0.0, 1.0, 0.75])
    }

    #[test]
    fn evaluate_sums_harmonics() {
        let c = sample();
        // t = 0: constant plus every cosine coefficient.
        assert_abs_diff_eq!(c.evaluate(0.0), 1.5 + 2.0 + 0.5 - 0.25, epsilon = 1e-12);
        // t = pi/2: cos(t)=0, sin(t)=1, cos(2t)=-1, sin(2t)=0, cos(3t)=0, sin(3t)=-1.
        assert_abs_diff_eq!(c.evaluate(FRAC_PI_2), 1.5 - 0.5 - 0.75, epsilon = 1e-12);
    }

    #[test]
    fn truncation_keeps_prefix() {
        let c = sample();
        let t = c.truncated(2);
        assert_eq!(t.harmonics(), 2);
        assert_eq!(t.cos, vec![2.0, 0.5]);
        assert_eq!(t.sin, vec![0.0, 1.0]);
        assert_abs_diff_eq!(t.constant, 1.5);
        assert_eq!(c.truncated(10), c);
    }

    #[test]
    fn polar_terms_reproduce_series() {
        let c = sample();
        let terms = c.polar_terms();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[2].harmonic, 3);
        let t = 0.83;
        let polar: f64 = c.constant + terms.iter().map(|p| p.evaluate(t)).sum::<f64>();
        assert_abs_diff_eq!(polar, c.evaluate(t), epsilon = 1e-12);
    }

    #[test]
    fn map_axes_visits_x_then_y() {
        let cc = CurveCoefficients {
            x: sample(),
            y: Coefficients::new(-1.0, vec![PI], vec![0.0]),
        };
        let (x, y) = cc.map_axes(Coefficients::harmonics);
        assert_eq!((x, y), (3, 1));
        let t = cc.truncated(1);
        assert_eq!(t.x.harmonics(), 1);
        assert_eq!(t.y.harmonics(), 1);
    }
}
