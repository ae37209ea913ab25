//! A whole validation run: resolve the input file, analyze its features and
//! decide the process exit status.

use crate::config::Config;
use crate::error::{Result, RingCheckError};
use crate::geojson::read_feature_collection;
use crate::report::GeometryReport;
use tracing::{info, warn};

/// Exit status when every analyzed ring is clean.
pub const EXIT_CLEAN: u8 = 0;

/// Exit status when at least one ring self-intersects.
pub const EXIT_INTERSECTING: u8 = 1;

/// Exit status when the input cannot be validated.
pub const EXIT_INVALID: u8 = 2;

/// What a successful run found.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The collection has no features; nothing was analyzed.
    NoFeatures,
    /// The rings of the selected features were analyzed.
    Analyzed(GeometryReport),
}

impl Outcome {
    /// Returns the process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Analyzed(report) if report.has_self_intersections() => EXIT_INTERSECTING,
            _ => EXIT_CLEAN,
        }
    }

    /// Renders the text printed on stdout.
    pub fn render(&self, limit: usize) -> String {
        match self {
            Outcome::NoFeatures => "No features found\n".to_string(),
            Outcome::Analyzed(report) => report.render(limit),
        }
    }
}

/// Maps the result of [`run`] to a process exit status.
pub fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(_) => EXIT_INVALID,
    }
}

/// Validates the boundary file selected by `config`.
///
/// In the default mode only the first feature is analyzed and an unsupported
/// geometry fails the run. With `--all-features`, features whose geometry is
/// missing or not polygonal are logged and skipped so the others are still
/// reported.
pub fn run(config: &Config) -> Result<Outcome> {
    config.validate()?;

    let path = config.geojson_path()?;
    info!(
        path = %path.display(),
        epsilon = config.epsilon,
        all_features = config.all_features,
        "Validating boundary rings"
    );

    let collection = read_feature_collection(&path)?;
    if collection.features.is_empty() {
        return Ok(Outcome::NoFeatures);
    }

    let options = config.validate_options();
    let feature_count = if config.all_features {
        collection.features.len()
    } else {
        1
    };

    let mut report = GeometryReport::new();
    for (fi, feature) in collection.features.iter().take(feature_count).enumerate() {
        let polygons = match feature.polygons() {
            Ok(polygons) => polygons,
            Err(RingCheckError::UnsupportedGeometry(kind)) if config.all_features => {
                warn!(feature = fi, geometry = %kind, "skipping feature");
                report.skipped_features.push(fi);
                continue;
            }
            Err(err) => return Err(err),
        };
        report.add_polygons(fi, &polygons, &options);
    }

    info!(
        rings = report.rings.len(),
        skipped_features = report.skipped_features.len(),
        tested_pairs = report.tested_pairs(),
        intersections = report.intersection_count(),
        "Validation finished"
    );

    Ok(Outcome::Analyzed(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SQUARE: &str =
        r#"{"type": "Polygon", "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]]}"#;
    const BOWTIE: &str =
        r#"{"type": "Polygon", "coordinates": [[[0.0, 0.0], [2.0, 2.0], [0.0, 2.0], [2.0, 0.0], [0.0, 0.0]]]}"#;
    const LINE: &str = r#"{"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}"#;

    fn collection(geometries: &[&str]) -> NamedTempFile {
        let features: Vec<String> = geometries
            .iter()
            .map(|g| format!(r#"{{"type": "Feature", "properties": {{}}, "geometry": {g}}}"#))
            .collect();
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            features.join(",")
        )
        .unwrap();
        file
    }

    fn config_for(file: &NamedTempFile, extra: &[&str]) -> Config {
        let path = file.path().to_str().unwrap();
        let args = ["ringcheck", "--file", path].into_iter().chain(extra.iter().copied());
        Config::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_clean_ring_exits_zero() {
        let file = collection(&[SQUARE]);
        let result = run(&config_for(&file, &[]));
        assert_eq!(exit_status(&result), EXIT_CLEAN);
        let text = result.unwrap().render(20);
        assert!(text.contains(" - no self-intersections found"));
    }

    #[test]
    fn test_no_features_exits_zero() {
        let file = collection(&[]);
        let result = run(&config_for(&file, &[]));
        assert_eq!(exit_status(&result), EXIT_CLEAN);
        let outcome = result.unwrap();
        assert_eq!(outcome, Outcome::NoFeatures);
        assert_eq!(outcome.render(20), "No features found\n");
    }

    #[test]
    fn test_intersection_exits_one() {
        let file = collection(&[BOWTIE]);
        let result = run(&config_for(&file, &[]));
        assert_eq!(exit_status(&result), EXIT_INTERSECTING);
        assert!(result.unwrap().render(20).contains("   * edges 0-1 and 2-3"));
    }

    #[test]
    fn test_only_first_feature_by_default() {
        // The second feature would intersect, but only the first is read
        let file = collection(&[SQUARE, BOWTIE]);
        let result = run(&config_for(&file, &[]));
        assert_eq!(exit_status(&result), EXIT_CLEAN);
    }

    #[test]
    fn test_missing_file_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.geojson");
        let config =
            Config::try_parse_from(["ringcheck", "--file", path.to_str().unwrap()]).unwrap();
        let result = run(&config);
        assert!(matches!(result, Err(RingCheckError::NotFound(_))));
        assert_eq!(exit_status(&result), EXIT_INVALID);
    }

    #[test]
    fn test_unsupported_first_feature_exits_two() {
        let file = collection(&[LINE, SQUARE]);
        let result = run(&config_for(&file, &[]));
        assert!(matches!(result, Err(RingCheckError::UnsupportedGeometry(ref k)) if k == "LineString"));
        assert_eq!(exit_status(&result), EXIT_INVALID);

        let file = collection(&["null"]);
        assert_eq!(exit_status(&run(&config_for(&file, &[]))), EXIT_INVALID);
    }

    #[test]
    fn test_invalid_coordinates_exit_two() {
        let file = collection(&[r#"{"type": "Polygon", "coordinates": [[[0.0, "x"]]]}"#]);
        let result = run(&config_for(&file, &[]));
        assert!(matches!(result, Err(RingCheckError::InvalidCoordinates { .. })));
        assert_eq!(exit_status(&result), EXIT_INVALID);
    }

    #[test]
    fn test_all_features_skips_unsupported_geometry() {
        let file = collection(&[SQUARE, LINE, "null", BOWTIE]);
        let result = run(&config_for(&file, &["--all-features"]));
        assert_eq!(exit_status(&result), EXIT_INTERSECTING);

        let Ok(Outcome::Analyzed(report)) = result else {
            panic!("expected an analyzed report");
        };
        assert_eq!(report.skipped_features, vec![1, 2]);
        assert_eq!(report.rings.len(), 2);
        assert_eq!(report.rings[1].feature, 3);

        let text = report.render(20);
        assert!(text.contains("Feature 0\n"));
        assert!(text.contains("Feature 3\n"));
        assert!(!text.contains("Feature 1\n"));
    }

    #[test]
    fn test_all_features_still_rejects_bad_coordinates() {
        let file = collection(&[SQUARE, r#"{"type": "Polygon", "coordinates": [[[0.0]]]}"#]);
        let result = run(&config_for(&file, &["--all-features"]));
        assert_eq!(exit_status(&result), EXIT_INVALID);
    }
}
