//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::fmt;
use std::ops::Sub;

/// A 2D point (position).
///
/// Ring coordinates arrive as longitude/latitude pairs; they are stored as
/// `x` = longitude and `y` = latitude and treated as plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

/// Formats as `(x, y)`, always showing a fractional part (`(2.0, 48.85)`).
impl<F: Float + fmt::Debug> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_gives_vector() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        let v = b - a;
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_from_tuple_and_display() {
        let p: Point2<f64> = (2.35, 48.85).into();
        assert_eq!(p, Point2::new(2.35, 48.85));
        assert_eq!(p.to_string(), "(2.35, 48.85)");
        assert_eq!(Point2::new(0.0_f64, -2.0).to_string(), "(0.0, -2.0)");
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, 2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 2.0).is_finite());
        assert!(!Point2::new(1.0, f64::INFINITY).is_finite());
    }
}
