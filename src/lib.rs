//! Fourier-series fitting for closed 2D parametric curves.
//!
//! A [`FourierSeries`] takes an ordered loop of `(x, y)` samples, maps it
//! onto one `2*pi` period by arc length, and integrates each axis against a
//! fixed number of harmonics. The fitted coefficients can be evaluated as
//! `x(t)`, `y(t)`, sampled into a polyline, or exported as text for graphing
//! tools.
//!
//! ```no_run
//! use fourier_curve::export::{CoefficientList, ExpandedFormula};
//! use fourier_curve::series::{FitParams, FourierSeries, Terms};
//!
//! # fn main() -> fourier_curve::Result<()> {
//! let xs = [0.0, 1.0, 1.0, 0.0];
//! let ys = [0.0, 0.0, 1.0, 1.0];
//! let series = FourierSeries::new(&xs, &ys, FitParams::new(8))?;
//!
//! let curve = series.evaluator(Terms::First(4))?;
//! let _p = curve.point(1.0);
//!
//! let _formula = ExpandedFormula::new(&series).execute(Terms::All)?;
//! let _list = CoefficientList::new(&series).execute(Terms::All)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod sampling;
pub mod series;

pub use error::{CurveError, Result};
pub use series::{FitParams, FourierSeries, Terms};
