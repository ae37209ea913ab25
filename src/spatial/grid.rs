//! Uniform grid that buckets ring edges by the cells their bounds overlap.
//!
//! Two edges can only intersect if their bounding boxes overlap, and any
//! point shared by both boxes lands in a cell both edges were inserted into.
//! Pairing edges per cell therefore finds every intersecting pair while
//! skipping most of the O(m²) pairs of a long ring.

use crate::bounds::Aabb2;
use crate::primitives::Segment2;
use num_traits::Float;
use std::collections::HashSet;
use tracing::debug;

/// Smallest number of cells per grid side.
pub const MIN_GRID_DIM: usize = 16;

/// Largest number of cells per grid side.
pub const MAX_GRID_DIM: usize = 256;

/// Floor applied to the bounding-box span on each axis.
pub const MIN_SPAN: f64 = 1e-9;

/// Returns the number of cells per grid side for a ring with `edge_count` edges.
///
/// The side scales with `sqrt(edge_count)` and is clamped to
/// `[min_dim, max_dim]`. The lower bound wins if the two cross.
///
/// ```
/// use ringcheck::spatial::grid_dimension;
///
/// assert_eq!(grid_dimension(10, 16, 256), 16);
/// assert_eq!(grid_dimension(2500, 16, 256), 50);
/// assert_eq!(grid_dimension(1_000_000, 16, 256), 256);
/// ```
pub fn grid_dimension(edge_count: usize, min_dim: usize, max_dim: usize) -> usize {
    let side = (edge_count as f64).sqrt() as usize;
    min_dim.max(max_dim.min(side))
}

/// Inclusive range of cells covered by a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub ix0: usize,
    pub ix1: usize,
    pub iy0: usize,
    pub iy1: usize,
}

impl CellRange {
    /// Iterates over the `(ix, iy)` cells of the range.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (self.ix0..=self.ix1).flat_map(move |ix| (self.iy0..=self.iy1).map(move |iy| (ix, iy)))
    }

    /// Returns the number of cells in the range.
    pub fn cell_count(self) -> usize {
        (self.ix1 - self.ix0 + 1) * (self.iy1 - self.iy0 + 1)
    }
}

/// A square grid of `dim × dim` cells over the bounds of a set of edges.
///
/// Each cell holds, in increasing order, the indices of the edges whose
/// bounding box overlaps it.
#[derive(Debug, Clone)]
pub struct EdgeGrid<F> {
    bounds: Aabb2<F>,
    dim: usize,
    cell_w: F,
    cell_h: F,
    cells: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<F: Float> EdgeGrid<F> {
    /// Builds a grid over `edges`.
    ///
    /// The side is never larger than [`MAX_GRID_DIM`], whatever `min_dim` and
    /// `max_dim` ask for. Returns `None` when there are no edges to index.
    pub fn build(edges: &[Segment2<F>], min_dim: usize, max_dim: usize) -> Option<Self> {
        let bounds = Aabb2::from_points(edges.iter().flat_map(|e| [e.start, e.end]))?;
        let dim = grid_dimension(edges.len(), min_dim, max_dim).clamp(1, MAX_GRID_DIM);

        let min_span = F::from(MIN_SPAN).unwrap_or_else(F::epsilon);
        let (span_x, span_y) = bounds.spans_at_least(min_span);
        let cells_per_side = F::from(dim).unwrap_or_else(F::one);

        let mut grid = Self {
            bounds,
            dim,
            cell_w: span_x / cells_per_side,
            cell_h: span_y / cells_per_side,
            cells: vec![Vec::new(); dim * dim],
            edge_count: edges.len(),
        };

        for (i, edge) in edges.iter().enumerate() {
            for (ix, iy) in grid.cell_range(edge.bounds()).cells() {
                grid.cells[iy * dim + ix].push(i);
            }
        }

        debug!(
            edges = edges.len(),
            dim,
            occupied = grid.occupied_cells(),
            "built edge grid"
        );

        Some(grid)
    }

    /// Returns the number of cells per side.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Returns the bounds the grid was laid over.
    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        self.bounds
    }

    /// Returns the number of edges that were indexed.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the edge indices stored in cell `(ix, iy)`.
    ///
    /// Out-of-range cells are empty.
    pub fn cell(&self, ix: usize, iy: usize) -> &[usize] {
        if ix >= self.dim || iy >= self.dim {
            return &[];
        }
        &self.cells[iy * self.dim + ix]
    }

    /// Returns the number of cells holding at least one edge.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns the cells overlapped by `aabb`, clamped to the grid.
    pub fn cell_range(&self, aabb: Aabb2<F>) -> CellRange {
        let (ix0, ix1) = (
            self.axis_index(aabb.min.x, self.bounds.min.x, self.cell_w),
            self.axis_index(aabb.max.x, self.bounds.min.x, self.cell_w),
        );
        let (iy0, iy1) = (
            self.axis_index(aabb.min.y, self.bounds.min.y, self.cell_h),
            self.axis_index(aabb.max.y, self.bounds.min.y, self.cell_h),
        );
        CellRange { ix0, ix1, iy0, iy1 }
    }

    /// Truncates the offset from `origin` to a cell index and clamps it.
    fn axis_index(&self, v: F, origin: F, cell: F) -> usize {
        let idx = ((v - origin) / cell).to_usize().unwrap_or(0);
        idx.min(self.dim - 1)
    }

    /// Returns every unordered pair of edges sharing at least one cell.
    ///
    /// Each pair is yielded once as `(i, j)` with `i < j`, even when the two
    /// edges share many cells.
    pub fn candidate_pairs(&self) -> CandidatePairs<'_> {
        CandidatePairs {
            cells: &self.cells,
            edge_count: self.edge_count,
            cell: 0,
            i: 0,
            j: 1,
            seen: HashSet::new(),
        }
    }
}

/// Iterator over the deduplicated candidate pairs of an [`EdgeGrid`].
pub struct CandidatePairs<'a> {
    cells: &'a [Vec<usize>],
    edge_count: usize,
    cell: usize,
    i: usize,
    j: usize,
    seen: HashSet<usize>,
}

impl Iterator for CandidatePairs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.cells;
        while let Some(members) = cells.get(self.cell) {
            while self.i < members.len() {
                while self.j < members.len() {
                    let (a, b) = (members[self.i], members[self.j]);
                    self.j += 1;

                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    // Canonical key for the unordered pair
                    if self.seen.insert(lo * self.edge_count + hi) {
                        return Some((lo, hi));
                    }
                }
                self.i += 1;
                self.j = self.i + 1;
            }
            self.cell += 1;
            self.i = 0;
            self.j = 1;
        }
        None
    }
}
