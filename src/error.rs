//! Error types for loading and validating boundary files.
//!
//! The geometry itself never fails; these cover reading GeoJSON and
//! checking the command-line configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading rings for validation.
#[derive(Debug, Error)]
pub enum RingCheckError {
    /// The GeoJSON file does not exist.
    #[error("GeoJSON not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid GeoJSON.
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Only `Polygon` and `MultiPolygon` geometries carry rings.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    /// A ring position is not a pair of finite numbers.
    #[error("invalid coordinates in polygon {polygon} ring {ring} at position {position}")]
    InvalidCoordinates {
        /// Polygon index within the geometry.
        polygon: usize,
        /// Ring index within the polygon.
        ring: usize,
        /// Position index within the ring.
        position: usize,
    },

    /// The command-line configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RingCheckError>;
