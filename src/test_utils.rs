/// Assert that an axis spans `[lo, hi]`.
#[macro_export]
macro_rules! assert_axis {
    ( $axis:expr, $lo:expr, $hi:expr ) => {
        let axis: &$crate::bounds::BoundedAxis = $axis;
        approx::assert_abs_diff_eq!(axis.low(), $lo);
        approx::assert_abs_diff_eq!(axis.high(), $hi);
    };
}

/// Assert that a token parses to `$expected`.
#[macro_export]
macro_rules! assert_parses {
    ( $format:expr, $token:expr, $expected:expr ) => {
        let parsed = $format.parse($token);
        assert!(parsed.is_some(), "failed to parse `{}`", $token);
        approx::assert_abs_diff_eq!(parsed.unwrap(), $expected, epsilon = 1e-12);
    };
}
