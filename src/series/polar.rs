/// A single harmonic in amplitude/phase form.
///
/// Represents `amplitude * cos(harmonic * t + phase)`, which equals
/// `a * cos(harmonic * t) + b * sin(harmonic * t)` for the cosine/sine pair
/// it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarTerm {
    /// Harmonic index, starting at 1.
    pub harmonic: usize,
    /// `sqrt(a^2 + b^2)`.
    pub amplitude: f64,
    /// `-atan2(b, a)`.
    pub phase: f64,
}

impl PolarTerm {
    /// Creates a term from explicit amplitude and phase.
    #[must_use]
    pub fn new(harmonic: usize, amplitude: f64, phase: f64) -> Self {
        Self {
            harmonic,
            amplitude,
            phase,
        }
    }

    /// Converts a cosine coefficient `a` and sine coefficient `b`.
    #[must_use]
    pub fn from_cos_sin(harmonic: usize, a: f64, b: f64) -> Self {
        Self {
            harmonic,
            amplitude: a.hypot(b),
            phase: -b.atan2(a),
        }
    }

    /// Returns the `(cos, sin)` coefficient pair this term represents.
    #[must_use]
    pub fn to_cos_sin(&self) -> (f64, f64) {
        (
            self.amplitude * self.phase.cos(),
            -self.amplitude * self.phase.sin(),
        )
    }

    /// Evaluates the term at time `t`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * (self.harmonic as f64 * t + self.phase).cos()
    }
}
