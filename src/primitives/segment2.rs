//! 2D line segment type.

use super::Point2;
use crate::bounds::Aabb2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// A ring edge `i` is the segment from vertex `i` to vertex `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[inline]
    pub fn bounds(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
