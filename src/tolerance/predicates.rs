//! Geometric predicates with explicit tolerance.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;

/// Default collinearity tolerance, tuned for coordinates in degrees.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Returns twice the signed area of triangle `abc`.
///
/// Positive when `c` is to the left of the directed line `a -> b`
/// (counter-clockwise turn), negative to the right, zero when collinear.
#[inline]
pub fn orient<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Classifies the orientation of three points with tolerance.
///
/// If the absolute value of [`orient`] is at most `eps` the points are
/// considered collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = orient(a, b, c);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks whether `p` lies on the segment `a`-`b`.
///
/// `p` must be collinear with the segment (`|orient| <= eps`) and fall inside
/// the segment's bounding box, widened by `eps` on each side.
#[inline]
pub fn on_segment<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>, eps: F) -> bool {
    if orient(a, b, p).abs() > eps {
        return false;
    }
    Aabb2::from_corners(a, b).contains_point_eps(p, eps)
}

#[inline]
fn opposite_signs<F: Float>(u: F, v: F) -> bool {
    let zero = F::zero();
    (u > zero && v < zero) || (u < zero && v > zero)
}

/// Tests whether segments `a`-`b` and `c`-`d` cross or touch.
///
/// A proper crossing needs a strict sign change on both orientation pairs;
/// an exactly-zero orientation never counts as a sign. Touching endpoints,
/// T-junctions and collinear overlaps are caught by the on-segment fallbacks.
///
/// # Example
///
/// ```
/// use ringcheck::{segments_intersect, Point2};
///
/// let eps = 1e-12;
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(2.0, 2.0);
///
/// // Crossing diagonal
/// assert!(segments_intersect(a, b, Point2::new(0.0, 2.0), Point2::new(2.0, 0.0), eps));
/// // Collinear overlap
/// assert!(segments_intersect(a, b, Point2::new(1.0, 1.0), Point2::new(3.0, 3.0), eps));
/// // Collinear but disjoint
/// assert!(!segments_intersect(a, b, Point2::new(3.0, 3.0), Point2::new(4.0, 4.0), eps));
/// ```
pub fn segments_intersect<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    d: Point2<F>,
    eps: F,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if opposite_signs(o1, o2) && opposite_signs(o3, o4) {
        return true;
    }

    (o1.abs() <= eps && on_segment(a, b, c, eps))
        || (o2.abs() <= eps && on_segment(a, b, d, eps))
        || (o3.abs() <= eps && on_segment(c, d, a, eps))
        || (o4.abs() <= eps && on_segment(c, d, b, eps))
}
