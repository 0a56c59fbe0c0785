use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};

use super::SampleLoop;

/// Arc-length time parametrization of a closed sample loop.
///
/// Sample `i` is assigned the cumulative length of the path up to it,
/// rescaled so that the full loop, closing segment included, spans exactly
/// one period of `2*pi`. Sparse samples therefore advance time quickly and
/// dense samples slowly.
///
/// Invariants: `times()[0] == 0`, times are non-decreasing and never exceed
/// `2*pi`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeParametrization {
    times: Vec<f64>,
    perimeter: f64,
}

impl TimeParametrization {
    /// Computes the parametrization of `samples`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the loop has no length (all
    /// samples coincide) or its length is not finite.
    pub fn new(samples: &SampleLoop) -> Result<Self> {
        let lengths = samples.segment_lengths();

        let mut cumulative = Vec::with_capacity(lengths.len());
        let mut total = 0.0;
        for len in &lengths {
            cumulative.push(total);
            total += len;
        }

        if !total.is_finite() {
            tracing::warn!(samples = samples.len(), "loop perimeter overflowed");
            return Err(GeometryError::Degenerate("loop perimeter is not finite".into()).into());
        }
        if total <= 0.0 {
            tracing::warn!(samples = samples.len(), perimeter = total, "all samples coincide");
            return Err(GeometryError::Degenerate(format!(
                "loop perimeter {total} is zero; all samples coincide"
            ))
            .into());
        }

        let times = cumulative.iter().map(|c| c / total * TAU).collect();
        Ok(Self {
            times,
            perimeter: total,
        })
    }

    /// Returns the time assigned to each sample.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the total length of the loop before rescaling.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Returns the period the loop is mapped onto.
    #[must_use]
    pub fn period(&self) -> f64 {
        TAU
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use crate::math::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn two_point_loop() {
        let s = SampleLoop::new(&[1.0, -1.0], &[0.0, 0.0]).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        assert!((tp.perimeter() - 4.0).abs() < TOLERANCE);
        assert_eq!(tp.times()[0], 0.0);
        assert!((tp.times()[1] - PI).abs() < TOLERANCE);
    }

    #[test]
    fn unit_square_quarters() {
        let s = SampleLoop::new(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        let expected = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
        for (t, e) in tp.times().iter().zip(expected) {
            assert!((t - e).abs() < TOLERANCE, "expected {e}, got {t}");
        }
    }

    #[test]
    fn uneven_spacing_follows_arc_length() {
        // Segment lengths 1, 3, then a closing segment of length 4.
        let s = SampleLoop::new(&[0.0, 1.0, 4.0], &[0.0, 0.0, 0.0]).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        assert!((tp.perimeter() - 8.0).abs() < TOLERANCE);
        assert!((tp.times()[1] - TAU / 8.0).abs() < TOLERANCE);
        assert!((tp.times()[2] - PI).abs() < TOLERANCE);
    }

    #[test]
    fn times_are_non_decreasing_and_bounded() {
        let xs = [0.0, 0.5, 0.5, 2.0, 1.0, 1.0, -1.0];
        let ys = [0.0, 0.1, 0.1, 1.0, 3.0, 3.0, 2.0];
        let s = SampleLoop::new(&xs, &ys).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        assert_eq!(tp.times()[0], 0.0);
        for w in tp.times().windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert!(tp.times().iter().all(|&t| t <= TAU));
        // Implied period: last time plus the scaled closing segment.
        let closing = s.segment_lengths()[xs.len() - 1] / tp.perimeter() * TAU;
        assert!((tp.times()[xs.len() - 1] + closing - tp.period()).abs() < 1e-9);
    }

    #[test]
    fn repeated_first_point_reaches_full_period() {
        let s = SampleLoop::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        assert!((tp.times()[2] - TAU).abs() < TOLERANCE);
    }

    #[test]
    fn coincident_samples_are_degenerate() {
        let s = SampleLoop::new(&[2.0, 2.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();
        let r = TimeParametrization::new(&s);
        assert!(matches!(
            r,
            Err(CurveError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn tiny_distinct_loop_is_not_degenerate() {
        let s = SampleLoop::new(&[1e-11, -1e-11], &[0.0, 0.0]).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        assert!((tp.perimeter() - 4e-11).abs() < 1e-24);
        assert!((tp.times()[1] - PI).abs() < 1e-12);
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        let s = SampleLoop::new(&[1e200, -1e200], &[0.0, 0.0]).unwrap();
        let tp = TimeParametrization::new(&s).unwrap();
        assert!((tp.perimeter() / 4e200 - 1.0).abs() < 1e-12);
        assert!((tp.times()[1] - PI).abs() < 1e-12);
    }

    #[test]
    fn overflowing_perimeter_is_degenerate() {
        let s = SampleLoop::new(&[-f64::MAX, f64::MAX], &[0.0, 0.0]).unwrap();
        assert!(TimeParametrization::new(&s).is_err());
    }
}
