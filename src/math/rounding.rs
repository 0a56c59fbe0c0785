/// Rounds `x` to the nearest multiple of `10^-decimals`.
///
/// Halfway cases round away from zero, so `-1.23455` becomes `-1.2346`
/// rather than rounding toward positive infinity. A result of negative zero is
/// returned as `0.0` so that it renders as `0`. If `10^decimals` overflows,
/// `x` is returned unchanged.
#[must_use]
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    if !scale.is_finite() {
        return x;
    }
    let rounded = (x * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_places() {
        assert!((round_to(1.234_56, 4) - 1.2346).abs() < 1e-12);
        assert!((round_to(-1.234_56, 4) + 1.2346).abs() < 1e-12);
    }

    #[test]
    fn renders_compactly() {
        assert_eq!(round_to(0.5, 4).to_string(), "0.5");
        assert_eq!(round_to(2.0, 4).to_string(), "2");
        assert_eq!(round_to(0.123_449, 4).to_string(), "0.1234");
    }

    #[test]
    fn negative_zero_is_normalized() {
        let r = round_to(-0.000_01, 4);
        assert!(r.is_sign_positive());
        assert_eq!(r.to_string(), "0");
    }

    #[test]
    fn zero_decimals_rounds_to_integer() {
        assert_eq!(round_to(2.5, 0).to_string(), "3");
        assert_eq!(round_to(-2.5, 0).to_string(), "-3");
    }

    #[test]
    fn negative_ties_round_away_from_zero() {
        assert_eq!(round_to(-0.125, 2).to_string(), "-0.13");
        assert_eq!(round_to(0.125, 2).to_string(), "0.13");
    }
}
