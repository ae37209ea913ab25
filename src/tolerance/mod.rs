//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used; [`DEFAULT_EPSILON`] is only a starting point
//! for callers working in degrees.

mod predicates;

pub use predicates::{
    on_segment, orient, orient2d, segments_intersect, Orientation, DEFAULT_EPSILON,
};
