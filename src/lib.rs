//! ringcheck - Self-intersection validation for polygon rings
//!
//! Event boundaries are drawn as GeoJSON polygons whose rings can cross
//! themselves after simplification or hand editing. This library finds every
//! pair of non-adjacent ring edges that cross, touch or overlap, using a
//! uniform grid to keep large boundaries (thousands of vertices) fast.
//!
//! Coordinates are treated as plane coordinates; longitude is `x` and
//! latitude is `y`.

pub mod bounds;
pub mod config;
pub mod error;
pub mod geojson;
pub mod polygon;
pub mod primitives;
pub mod report;
pub mod run;
pub mod spatial;
pub mod tolerance;

pub use error::{Result, RingCheckError};
pub use polygon::{find_self_intersections, Ring, RingReport, SelfIntersection, ValidateOptions};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{on_segment, orient, orient2d, segments_intersect, Orientation};
