//! Closed polygon rings.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A closed boundary loop of a polygon (outer boundary or hole).
///
/// The stored point sequence always ends with its first point: if the input
/// does not repeat the first point, it is appended. Edge `i` runs from
/// vertex `i` to vertex `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a ring, closing it if the last point differs from the first.
    ///
    /// ```
    /// use ringcheck::{polygon::Ring, Point2};
    ///
    /// let open = Ring::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(0.0, 4.0),
    /// ]);
    /// assert_eq!(open.points().len(), 5);
    /// assert_eq!(open.edge_count(), 4);
    /// ```
    pub fn new(mut points: Vec<Point2<F>>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Creates a ring from `(x, y)` pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    /// Returns the closed point sequence.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns `true` if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of edges `m` (closed length minus one).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns edge `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.edge_count()`.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<F> {
        Segment2::new(self.points[i], self.points[i + 1])
    }

    /// Iterates over the edges in ring order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Ring<F> {
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}
