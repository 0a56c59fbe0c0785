use std::f64::consts::TAU;

use crate::error::{InputError, Result};
use crate::math::Point2;
use crate::series::CurveEvaluator;

use super::SamplingParams;

/// Samples a fitted curve into a closed polyline.
///
/// Points are taken at `t = 0, step, 2 step, ...` while `t < 2*pi`, and the
/// `t = 0` point is repeated at the end to close the loop.
pub struct SampleCurve<'a> {
    curve: &'a CurveEvaluator,
    params: SamplingParams,
}

impl<'a> SampleCurve<'a> {
    /// Creates a new `SampleCurve` operation with default parameters.
    #[must_use]
    pub fn new(curve: &'a CurveEvaluator) -> Self {
        Self {
            curve,
            params: SamplingParams::default(),
        }
    }

    /// Sets custom sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the sampling, returning the closed polyline.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidStep` if the step is not finite, not
    /// positive, larger than `2*pi`, or would produce more than
    /// `max_points` samples.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let step = self.params.step;
        if !step.is_finite() || step <= 0.0 || step > TAU {
            return Err(InputError::InvalidStep(step).into());
        }
        #[allow(clippy::cast_precision_loss)]
        let max_points = self.params.max_points as f64;
        if TAU / step > max_points {
            return Err(InputError::InvalidStep(step).into());
        }

        let mut points = Vec::new();
        let mut i = 0usize;
        loop {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 * step;
            if t >= TAU {
                break;
            }
            points.push(self.curve.point(t));
            i += 1;
        }
        points.push(self.curve.point(0.0));
        tracing::trace!(points = points.len(), step, "sampled fitted curve");
        Ok(points)
    }
}
