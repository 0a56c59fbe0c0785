use std::f64::consts::TAU;

/// Computes `a mod n` with a result in `[0, n)` for positive `n`.
#[must_use]
pub fn positive_mod(a: f64, n: f64) -> f64 {
    ((a % n) + n) % n
}

/// Approximates the integral of a `2*pi`-periodic function over one period.
///
/// `times` and `values` are paired samples in time order. Consecutive samples
/// are joined by trapezoids, and a closing trapezoid joins the last sample
/// back to the first. Every trapezoid width is taken modulo `2*pi`, so the
/// closing width `T[0] - T[last]` becomes the positive gap to the next period.
#[must_use]
pub fn periodic_integral(times: &[f64], values: &[f64]) -> f64 {
    debug_assert_eq!(times.len(), values.len());
    let n = times.len().min(values.len());
    if n == 0 {
        return 0.0;
    }

    let mut result = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let dt = positive_mod(times[j] - times[i], TAU);
        result += 0.5 * (values[i] + values[j]) * dt;
    }
    result
}
