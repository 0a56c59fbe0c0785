pub mod periodic;
pub mod rounding;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
