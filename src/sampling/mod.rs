mod sample_curve;

pub use sample_curve::SampleCurve;

/// Parameters controlling how densely a fitted curve is sampled.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Time step between consecutive samples, in radians.
    pub step: f64,
    /// Maximum number of samples per period.
    pub max_points: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            step: 0.05,
            max_points: 65_536,
        }
    }
}
