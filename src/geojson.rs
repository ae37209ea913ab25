//! GeoJSON input for boundary validation.
//!
//! Only the parts of a FeatureCollection that carry rings are modelled:
//! `Polygon` and `MultiPolygon` geometries. Other geometry types are
//! rejected before any ring reaches the validator.

use crate::error::{Result, RingCheckError};
use crate::primitives::Point2;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The raw positions of one polygon: outer ring first, then holes.
///
/// Rings are kept exactly as read (closed or not) so reports can quote the
/// original point count.
pub type PolygonCoords = Vec<Vec<Point2<f64>>>;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single GeoJSON Feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// A GeoJSON geometry with its coordinates left untyped until extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl Feature {
    /// Returns the polygons of this feature's geometry.
    pub fn polygons(&self) -> Result<Vec<PolygonCoords>> {
        match &self.geometry {
            Some(geometry) => geometry.polygons(),
            None => Err(RingCheckError::UnsupportedGeometry("null".into())),
        }
    }
}

impl Geometry {
    /// Extracts the polygons of a `Polygon` or `MultiPolygon` geometry.
    ///
    /// A `Polygon` yields one entry. Missing coordinates yield no polygons.
    pub fn polygons(&self) -> Result<Vec<PolygonCoords>> {
        match self.kind.as_str() {
            "Polygon" => {
                if self.coordinates.is_null() {
                    return Ok(Vec::new());
                }
                Ok(vec![parse_polygon(&self.coordinates, 0)?])
            }
            "MultiPolygon" => {
                let Some(polygons) = array_or_empty(&self.coordinates) else {
                    return Err(RingCheckError::InvalidCoordinates {
                        polygon: 0,
                        ring: 0,
                        position: 0,
                    });
                };
                polygons
                    .iter()
                    .enumerate()
                    .map(|(pi, polygon)| parse_polygon(polygon, pi))
                    .collect()
            }
            other => Err(RingCheckError::UnsupportedGeometry(other.to_string())),
        }
    }
}

/// Treats `null` as an empty array.
fn array_or_empty(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Null => Some(&[] as &[Value]),
        Value::Array(items) => Some(items.as_slice()),
        _ => None,
    }
}

fn parse_polygon(value: &Value, polygon: usize) -> Result<PolygonCoords> {
    let invalid = |ring, position| RingCheckError::InvalidCoordinates {
        polygon,
        ring,
        position,
    };

    let rings = array_or_empty(value).ok_or_else(|| invalid(0, 0))?;
    rings
        .iter()
        .enumerate()
        .map(|(ri, ring)| {
            let positions = array_or_empty(ring).ok_or_else(|| invalid(ri, 0))?;
            positions
                .iter()
                .enumerate()
                .map(|(k, position)| parse_position(position).ok_or_else(|| invalid(ri, k)))
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// Reads `[lon, lat, ...]`; trailing elements such as altitude are ignored.
fn parse_position(value: &Value) -> Option<Point2<f64>> {
    let items = value.as_array()?;
    let x = items.first()?.as_f64()?;
    let y = items.get(1)?.as_f64()?;
    let p = Point2::new(x, y);
    p.is_finite().then_some(p)
}

/// Parses a FeatureCollection from a JSON string.
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a FeatureCollection from a file.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    if !path.exists() {
        return Err(RingCheckError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| RingCheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let collection = parse_feature_collection(&text)?;

    debug!(
        path = %path.display(),
        features = collection.features.len(),
        "loaded feature collection"
    );
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const POLYGON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "paris"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [
                    [[2.2, 48.8], [2.4, 48.8], [2.4, 48.9], [2.2, 48.9], [2.2, 48.8]],
                    [[2.3, 48.85, 35.0], [2.31, 48.85], [2.31, 48.86]]
                ]
            }
        }]
    }"#;

    #[test]
    fn test_polygon_rings() {
        let fc = parse_feature_collection(POLYGON).unwrap();
        assert_eq!(fc.features.len(), 1);

        let polygons = fc.features[0].polygons().unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 2);
        assert_eq!(polygons[0][0].len(), 5);
        // Altitude dropped
        assert_eq!(polygons[0][1][0], Point2::new(2.3, 48.85));
    }

    #[test]
    fn test_multipolygon() {
        let geometry: Geometry = serde_json::from_str(
            r#"{"type": "MultiPolygon", "coordinates": [
                [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                [[[5, 5], [6, 5], [6, 6], [5, 5]], [[5.2, 5.1], [5.8, 5.1], [5.8, 5.5]]]
            ]}"#,
        )
        .unwrap();
        let polygons = geometry.polygons().unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 1);
        assert_eq!(polygons[1].len(), 2);
        assert_eq!(polygons[1][1][2], Point2::new(5.8, 5.5));
    }

    #[test]
    fn test_unsupported_geometry() {
        let geometry: Geometry =
            serde_json::from_str(r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}"#)
                .unwrap();
        match geometry.polygons() {
            Err(RingCheckError::UnsupportedGeometry(kind)) => assert_eq!(kind, "LineString"),
            other => panic!("expected unsupported geometry, got {other:?}"),
        }

        let feature: Feature = serde_json::from_str(r#"{"type": "Feature", "geometry": null}"#).unwrap();
        assert!(matches!(
            feature.polygons(),
            Err(RingCheckError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn test_invalid_position_located() {
        let geometry: Geometry = serde_json::from_str(
            r#"{"type": "MultiPolygon", "coordinates": [
                [[[0, 0], [1, 0], [1, 1]]],
                [[[0, 0], [1, 0], [1, 1]], [[0, 0], ["x", 0]]]
            ]}"#,
        )
        .unwrap();
        match geometry.polygons() {
            Err(RingCheckError::InvalidCoordinates {
                polygon,
                ring,
                position,
            }) => assert_eq!((polygon, ring, position), (1, 1, 1)),
            other => panic!("expected invalid coordinates, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_coordinates_is_empty() {
        let geometry: Geometry = serde_json::from_str(r#"{"type": "Polygon"}"#).unwrap();
        assert!(geometry.polygons().unwrap().is_empty());
    }

    #[test]
    fn test_no_features() {
        let fc = parse_feature_collection(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(fc.features.is_empty());
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(POLYGON.as_bytes()).unwrap();

        let fc = read_feature_collection(file.path()).unwrap();
        assert_eq!(fc.features.len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.geojson");
        match read_feature_collection(&path) {
            Err(RingCheckError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
