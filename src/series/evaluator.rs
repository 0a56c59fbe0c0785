use crate::math::Point2;

use super::{Coefficients, CurveCoefficients};

/// A real-valued `2*pi`-periodic function backed by one axis' coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisEvaluator {
    coefficients: Coefficients,
}

impl AxisEvaluator {
    /// Creates an evaluator over `coefficients`, using every harmonic held.
    #[must_use]
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    /// Evaluates the series at time `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.coefficients.evaluate(t)
    }

    /// Returns the coefficients being evaluated.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Returns the evaluator as a plain closure.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |t| self.evaluate(t)
    }
}

/// Reconstructs a closed curve from `x(t)` and `y(t)` evaluators.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveEvaluator {
    x: AxisEvaluator,
    y: AxisEvaluator,
}

impl CurveEvaluator {
    /// Creates an evaluator over both axes of `coefficients`.
    #[must_use]
    pub fn new(coefficients: CurveCoefficients) -> Self {
        Self {
            x: AxisEvaluator::new(coefficients.x),
            y: AxisEvaluator::new(coefficients.y),
        }
    }

    /// Evaluates `x(t)`.
    #[must_use]
    pub fn x(&self, t: f64) -> f64 {
        self.x.evaluate(t)
    }

    /// Evaluates `y(t)`.
    #[must_use]
    pub fn y(&self, t: f64) -> f64 {
        self.y.evaluate(t)
    }

    /// Evaluates the curve point at time `t`.
    #[must_use]
    pub fn point(&self, t: f64) -> Point2 {
        Point2::new(self.x(t), self.y(t))
    }

    /// Returns the x-axis evaluator.
    #[must_use]
    pub fn x_axis(&self) -> &AxisEvaluator {
        &self.x
    }

    /// Returns the y-axis evaluator.
    #[must_use]
    pub fn y_axis(&self) -> &AxisEvaluator {
        &self.y
    }
}
