//! Self-intersection detection for polygon rings.
//!
//! Candidate edge pairs come from an [`EdgeGrid`] laid over the ring, so large
//! boundary rings (thousands of vertices) are checked without testing every
//! pair of edges.
//!
//! # Example
//!
//! ```
//! use ringcheck::polygon::{find_self_intersections, Ring, ValidateOptions};
//!
//! // A bowtie: the first and third edges cross at (1, 1)
//! let bowtie: Ring<f64> = Ring::from_coords(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)]);
//!
//! let report = find_self_intersections(&bowtie, &ValidateOptions::default());
//! assert_eq!(report.intersections.len(), 1);
//! assert_eq!((report.intersections[0].edge1, report.intersections[0].edge2), (0, 2));
//! ```

use super::ring::Ring;
use crate::primitives::{Point2, Segment2};
use crate::spatial::{EdgeGrid, MAX_GRID_DIM, MIN_GRID_DIM};
use crate::tolerance::{segments_intersect, DEFAULT_EPSILON};
use num_traits::Float;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Rings with fewer edges than this are never reported as self-intersecting.
pub const MIN_CHECKED_EDGES: usize = 4;

/// A crossing or overlap between two non-adjacent edges of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfIntersection<F> {
    /// Index of the first edge; always less than `edge2`.
    pub edge1: usize,
    /// Index of the second edge.
    pub edge2: usize,
    /// Start of the first edge.
    pub a: Point2<F>,
    /// End of the first edge.
    pub b: Point2<F>,
    /// Start of the second edge.
    pub c: Point2<F>,
    /// End of the second edge.
    pub d: Point2<F>,
}

impl<F: Float> SelfIntersection<F> {
    fn new(edge1: usize, first: Segment2<F>, edge2: usize, second: Segment2<F>) -> Self {
        Self {
            edge1,
            edge2,
            a: first.start,
            b: first.end,
            c: second.start,
            d: second.end,
        }
    }

    /// Returns the first edge as a segment.
    #[inline]
    pub fn first(&self) -> Segment2<F> {
        Segment2::new(self.a, self.b)
    }

    /// Returns the second edge as a segment.
    #[inline]
    pub fn second(&self) -> Segment2<F> {
        Segment2::new(self.c, self.d)
    }
}

/// Outcome of analyzing one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingReport<F> {
    /// Every intersecting edge pair, sorted by `(edge1, edge2)`.
    pub intersections: Vec<SelfIntersection<F>>,
    /// Wall-clock time spent testing candidate pairs.
    pub elapsed: Duration,
    /// Number of distinct non-adjacent candidate pairs tested.
    pub tested_pairs: usize,
}

impl<F: Float> RingReport<F> {
    /// The report for a ring too small to self-intersect.
    pub fn empty() -> Self {
        Self {
            intersections: Vec::new(),
            elapsed: Duration::ZERO,
            tested_pairs: 0,
        }
    }

    /// Returns `true` if at least one self-intersection was found.
    #[inline]
    pub fn has_self_intersections(&self) -> bool {
        !self.intersections.is_empty()
    }

    /// Returns the set of intersecting `(edge1, edge2)` pairs.
    pub fn edge_pairs(&self) -> BTreeSet<(usize, usize)> {
        self.intersections
            .iter()
            .map(|s| (s.edge1, s.edge2))
            .collect()
    }
}

/// Tuning knobs for [`find_self_intersections`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidateOptions<F> {
    /// Collinearity and bounding-box slack used by the segment predicate.
    ///
    /// The default of `1e-12` suits coordinates in degrees; projected
    /// coordinates in metres need a larger value.
    pub epsilon: F,
    /// Minimum number of grid cells per side.
    pub min_grid_dim: usize,
    /// Maximum number of grid cells per side.
    ///
    /// Values above [`MAX_GRID_DIM`] are capped to it.
    pub max_grid_dim: usize,
}

impl<F: Float> Default for ValidateOptions<F> {
    fn default() -> Self {
        Self {
            epsilon: F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            min_grid_dim: MIN_GRID_DIM,
            max_grid_dim: MAX_GRID_DIM,
        }
    }
}

impl<F: Float> ValidateOptions<F> {
    /// Returns these options with a different tolerance.
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Returns `true` if edges `i < j` of a ring with `m` edges share a vertex by
/// construction: consecutive edges, or the closing edge and the first edge.
#[inline]
pub fn edges_adjacent(i: usize, j: usize, m: usize) -> bool {
    j == i + 1 || (i == 0 && j + 1 == m)
}

/// Finds every pair of non-adjacent edges of `ring` that cross or touch.
///
/// Rings with fewer than [`MIN_CHECKED_EDGES`] edges return an empty report.
/// The result is a pure function of the ring and options.
pub fn find_self_intersections<F: Float>(
    ring: &Ring<F>,
    options: &ValidateOptions<F>,
) -> RingReport<F> {
    let m = ring.edge_count();
    if m < MIN_CHECKED_EDGES {
        return RingReport::empty();
    }

    let edges: Vec<Segment2<F>> = ring.edges().collect();
    let grid = match EdgeGrid::build(&edges, options.min_grid_dim, options.max_grid_dim) {
        Some(grid) => grid,
        None => return RingReport::empty(),
    };

    let mut intersections = Vec::new();
    let mut tested_pairs = 0usize;

    let start = Instant::now();
    for (i, j) in grid.candidate_pairs() {
        if edges_adjacent(i, j, m) {
            continue;
        }
        tested_pairs += 1;

        let (e1, e2) = (edges[i], edges[j]);
        if segments_intersect(e1.start, e1.end, e2.start, e2.end, options.epsilon) {
            intersections.push(SelfIntersection::new(i, e1, j, e2));
        }
    }
    let elapsed = start.elapsed();

    intersections.sort_by_key(|s| (s.edge1, s.edge2));

    debug!(
        edges = m,
        grid_dim = grid.dimension(),
        tested_pairs,
        intersections = intersections.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "analyzed ring"
    );

    RingReport {
        intersections,
        elapsed,
        tested_pairs,
    }
}

/// Returns `true` if `ring` has at least one self-intersection.
///
/// Stops at the first intersecting pair.
pub fn has_self_intersection<F: Float>(ring: &Ring<F>, options: &ValidateOptions<F>) -> bool {
    let m = ring.edge_count();
    if m < MIN_CHECKED_EDGES {
        return false;
    }

    let edges: Vec<Segment2<F>> = ring.edges().collect();
    let Some(grid) = EdgeGrid::build(&edges, options.min_grid_dim, options.max_grid_dim) else {
        return false;
    };

    grid.candidate_pairs()
        .filter(|&(i, j)| !edges_adjacent(i, j, m))
        .any(|(i, j)| {
            let (e1, e2) = (edges[i], edges[j]);
            segments_intersect(e1.start, e1.end, e2.start, e2.end, options.epsilon)
        })
}

/// Finds self-intersections by testing every pair of non-adjacent edges.
///
/// O(m²). Applies the same size cut-off, adjacency rule and predicate as
/// [`find_self_intersections`], so both return the same pairs.
pub fn find_self_intersections_naive<F: Float>(ring: &Ring<F>, eps: F) -> Vec<SelfIntersection<F>> {
    let m = ring.edge_count();
    let mut intersections = Vec::new();
    if m < MIN_CHECKED_EDGES {
        return intersections;
    }

    for i in 0..m {
        let e1 = ring.edge(i);
        for j in (i + 2)..m {
            if edges_adjacent(i, j, m) {
                continue;
            }
            let e2 = ring.edge(j);
            if segments_intersect(e1.start, e1.end, e2.start, e2.end, eps) {
                intersections.push(SelfIntersection::new(i, e1, j, e2));
            }
        }
    }

    intersections
}
