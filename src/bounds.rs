use std::fmt;

use thiserror::Error;

/// Which of the two raw values handed to an axis constructor a bound came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The first value, written `b` in reports.
    First,
    /// The second value, written `a` in reports.
    Second,
}

/// Identity of a single bound parameter, e.g. `b1` or `a3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundName {
    pub axis: Option<usize>,
    pub position: Position,
}

impl BoundName {
    pub fn new(axis: Option<usize>, position: Position) -> Self {
        BoundName { axis, position }
    }
}

impl fmt::Display for BoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.position {
            Position::First => 'b',
            Position::Second => 'a',
        };
        match self.axis {
            Some(axis) => write!(f, "{}{}", letter, axis),
            None => write!(f, "{}", letter),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{bound} must be a finite number (got {value})")]
    InvalidBound { bound: BoundName, value: f64 },
}

impl Error {
    /// The parameter that was rejected.
    pub fn bound(&self) -> BoundName {
        match self {
            Error::InvalidBound { bound, .. } => *bound,
        }
    }
}

/// Reject NaN and the infinities.
pub fn validate_finite(value: f64, bound: BoundName) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidBound { bound, value })
    }
}

pub trait Bounds {
    type Point: ?Sized;

    fn contains(&self, p: &Self::Point) -> bool;
}

/// A closed interval `[low, high]` on one axis. Both ends are finite and `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedAxis {
    low: f64,
    high: f64,
}

impl BoundedAxis {
    /// Construct an axis from two bounds given in either order.
    pub fn new(v1: f64, v2: f64) -> Result<Self, Error> {
        Self::validated(None, v1, v2)
    }

    /// Like [`BoundedAxis::new`], but errors name the bound with its 1-based axis number.
    pub fn on_axis(axis: usize, v1: f64, v2: f64) -> Result<Self, Error> {
        Self::validated(Some(axis), v1, v2)
    }

    fn validated(axis: Option<usize>, v1: f64, v2: f64) -> Result<Self, Error> {
        let v1 = validate_finite(v1, BoundName::new(axis, Position::First))?;
        let v2 = validate_finite(v2, BoundName::new(axis, Position::Second))?;
        Ok(BoundedAxis {
            low: v1.min(v2),
            high: v1.max(v2),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive at both ends. NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Render as a report line for the axis with the given 1-based index.
    pub fn describe(&self, index: usize) -> String {
        format!(
            "b{i} <= x{i} <= a{i} : {} <= x{i} <= {}",
            self.low,
            self.high,
            i = index
        )
    }
}

impl Bounds for BoundedAxis {
    type Point = f64;

    fn contains(&self, p: &f64) -> bool {
        BoundedAxis::contains(self, *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_normalizes_order() {
        let axis = BoundedAxis::new(10., 0.).unwrap();
        assert_eq!(axis.low(), 0.);
        assert_eq!(axis.high(), 10.);

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a: f64 = rng.gen_range(-1e6..1e6);
            let b: f64 = rng.gen_range(-1e6..1e6);
            let ab = BoundedAxis::new(a, b).unwrap();
            assert_eq!(ab, BoundedAxis::new(b, a).unwrap());
            assert!(ab.low() <= ab.high());
        }
    }

    #[test]
    fn test_degenerate_axis() {
        let axis = BoundedAxis::new(5., 5.).unwrap();
        assert!(axis.contains(5.));
        assert!(!axis.contains(5. + 1e-9));
        assert!(!axis.contains(5. - 1e-9));
    }

    #[test]
    fn test_inclusive_ends() {
        let axis = BoundedAxis::new(-2.5, 4.).unwrap();
        assert!(axis.contains(-2.5));
        assert!(axis.contains(4.));
        assert!(axis.contains(0.));
        assert!(!axis.contains(-2.5 - 1e-9));
        assert!(!axis.contains(4. + 1e-9));
    }

    #[test]
    fn test_non_finite_queries() {
        let axis = BoundedAxis::new(-1e300, 1e300).unwrap();
        assert!(!axis.contains(f64::NAN));
        assert!(!axis.contains(f64::INFINITY));
        assert!(!axis.contains(f64::NEG_INFINITY));
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = BoundedAxis::new(bad, 1.).unwrap_err();
            assert_eq!(err.bound(), BoundName::new(None, Position::First));

            let err = BoundedAxis::on_axis(2, 1., bad).unwrap_err();
            assert_eq!(err.bound(), BoundName::new(Some(2), Position::Second));
        }

        // The first bad parameter wins.
        let err = BoundedAxis::on_axis(1, f64::NAN, f64::INFINITY).unwrap_err();
        assert_eq!(err.bound().position, Position::First);
    }

    #[test]
    fn test_error_message() {
        let err = BoundedAxis::on_axis(3, 0., f64::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "a3 must be a finite number (got inf)");

        let err = BoundedAxis::new(f64::NAN, 0.).unwrap_err();
        assert_eq!(err.to_string(), "b must be a finite number (got NaN)");
    }

    #[test]
    fn test_describe() {
        let axis = BoundedAxis::new(2.5, -1.).unwrap();
        assert_eq!(axis.describe(2), "b2 <= x2 <= a2 : -1 <= x2 <= 2.5");
    }

    #[test]
    fn test_bounds_trait() {
        fn check<B: Bounds<Point = f64>>(b: &B, x: f64) -> bool {
            b.contains(&x)
        }
        let axis = BoundedAxis::new(0., 1.).unwrap();
        assert!(check(&axis, 0.5));
        assert!(!check(&axis, 1.5));
    }
}
