use crate::error::{InputError, Result};
use crate::math::Point2;

/// An ordered, closed loop of 2D sample points.
///
/// Point `i` connects to point `i + 1`, and the last point connects back to
/// the first. Construction rejects mismatched lengths, fewer than two
/// samples, and non-finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleLoop {
    points: Vec<Point2>,
}

impl SampleLoop {
    /// Creates a sample loop from separate coordinate sequences.
    ///
    /// # Errors
    ///
    /// Returns `InputError::LengthMismatch` if `xs` and `ys` differ in length,
    /// `InputError::TooFewSamples` if there are fewer than two samples, and
    /// `InputError::NonFinite` if any coordinate is NaN or infinite.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(InputError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            }
            .into());
        }
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point2::new(x, y))
            .collect();
        Self::from_points(points)
    }

    /// Creates a sample loop from points.
    ///
    /// # Errors
    ///
    /// Returns `InputError::TooFewSamples` if there are fewer than two points,
    /// and `InputError::NonFinite` if any coordinate is NaN or infinite.
    pub fn from_points(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(InputError::TooFewSamples { len: points.len() }.into());
        }
        for (index, p) in points.iter().enumerate() {
            for (axis, value) in [("x", p.x), ("y", p.y)] {
                if !value.is_finite() {
                    return Err(InputError::NonFinite { axis, index, value }.into());
                }
            }
        }
        Ok(Self { points })
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a valid loop holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the sample points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the x-coordinates in sample order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Returns the y-coordinates in sample order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Returns the length of each segment, `i -> i + 1`, ending with the
    /// closing segment from the last sample back to the first.
    ///
    /// Lengths are computed with `hypot`, so they stay finite for any pair of
    /// finite points less than `f64::MAX` apart.
    #[must_use]
    pub fn segment_lengths(&self) -> Vec<f64> {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let d = self.points[(i + 1) % n] - self.points[i];
                d.x.hypot(d.y)
            })
            .collect()
    }

    /// Returns the total length of the closed loop.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.segment_lengths().iter().sum()
    }
}
