//! 2D vector type for edge directions and offsets.

use num_traits::Float;

/// A 2D vector, the difference of two [`Point2`](super::Point2)s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`. For
    /// `(b - a).cross(c - a)` this is twice the signed area of triangle `abc`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_sign_follows_turn() {
        let east: Vec2<f64> = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        assert_eq!(east.cross(north), 1.0);
        assert_eq!(north.cross(east), -1.0);
        assert_eq!(east.cross(Vec2::new(3.0, 0.0)), 0.0);
    }
}
