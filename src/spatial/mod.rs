//! Spatial data structures and queries.
//!
//! - [`EdgeGrid`] - A uniform grid bucketing segments by the cells they span,
//!   used to enumerate candidate edge pairs for intersection tests

mod grid;

pub use grid::{
    grid_dimension, CandidatePairs, CellRange, EdgeGrid, MAX_GRID_DIM, MIN_GRID_DIM, MIN_SPAN,
};
