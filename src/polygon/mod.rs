//! Polygon rings and self-intersection validation.
//!
//! A polygon is a list of [`Ring`]s (outer boundary first, then holes). Rings
//! are validated independently; interactions between rings of the same
//! polygon are not checked.
//!
//! # Example
//!
//! ```
//! use ringcheck::polygon::{has_self_intersection, Ring, ValidateOptions};
//!
//! let square: Ring<f64> = Ring::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//! let figure8: Ring<f64> = Ring::from_coords(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
//!
//! let options = ValidateOptions::default();
//! assert!(!has_self_intersection(&square, &options));
//! assert!(has_self_intersection(&figure8, &options));
//! ```

mod ring;
mod validate;

pub use ring::Ring;
pub use validate::{
    edges_adjacent, find_self_intersections, find_self_intersections_naive,
    has_self_intersection, RingReport, SelfIntersection, ValidateOptions, MIN_CHECKED_EDGES,
};
