/// Linear interpolation between `min` (at `t = 0`) and `max` (at `t = 1`).
///
/// `t` is not clamped. Values outside `[0, 1]` extrapolate along the same
/// line, which the heuristics rely on for inputs beyond their calibration
/// points.
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    t * max + (1.0 - t) * min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 10.0)]
    #[case(1.0, 20.0)]
    #[case(0.5, 15.0)]
    #[case(2.0, 30.0)]
    #[case(-1.0, 0.0)]
    fn test_lerp(#[case] t: f64, #[case] expected: f64) {
        assert_eq!(lerp(10.0, 20.0, t), expected);
    }

    #[test]
    fn test_lerp_decreasing_range() {
        assert_eq!(lerp(1.125, 1.0, 0.0), 1.125);
        assert_eq!(lerp(1.125, 1.0, 1.0), 1.0);
        assert!(lerp(1.125, 1.0, 1.5) < 1.0);
    }
}
