//! Command-line configuration for the `ringcheck` tool.
//!
//! Boundary files live at
//! `<repo-root>/<maps-root>/<event>/src/main/assets/<event>.geojson`;
//! `--file` bypasses that layout.

use crate::error::{Result, RingCheckError};
use crate::polygon::ValidateOptions;
use crate::report::DEFAULT_LIMIT;
use crate::tolerance::DEFAULT_EPSILON;
use clap::Parser;
use std::path::PathBuf;

/// Configuration for a validation run.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ringcheck",
    about = "Detect self-intersecting rings in event boundary GeoJSON"
)]
pub struct Config {
    /// Event identifier; selects `<maps-root>/<event>/src/main/assets/<event>.geojson`
    #[arg(short, long)]
    pub event: Option<String>,

    /// Directory holding one map module per event
    #[arg(long, env = "RINGCHECK_MAPS_ROOT", default_value = "maps/android")]
    pub maps_root: PathBuf,

    /// Repository root the maps root is relative to
    #[arg(long, env = "RINGCHECK_REPO_ROOT", default_value = ".")]
    pub repo_root: PathBuf,

    /// Validate this GeoJSON file instead of resolving an event
    #[arg(long, conflicts_with = "event")]
    pub file: Option<PathBuf>,

    /// Maximum number of intersections listed per ring
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Collinearity tolerance, in coordinate units
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Analyze every feature instead of only the first
    #[arg(long)]
    pub all_features: bool,
}

impl Config {
    /// Validate the configuration at startup.
    pub fn validate(&self) -> Result<()> {
        if self.event.is_none() && self.file.is_none() {
            return Err(RingCheckError::Config(
                "either --event or --file is required".to_string(),
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(RingCheckError::Config(format!(
                "--epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Returns the GeoJSON file to validate.
    pub fn geojson_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.file {
            return Ok(file.clone());
        }
        let event = self
            .event
            .as_deref()
            .ok_or_else(|| RingCheckError::Config("no event given".to_string()))?;

        Ok(self
            .repo_root
            .join(&self.maps_root)
            .join(event)
            .join("src/main/assets")
            .join(format!("{event}.geojson")))
    }

    /// Returns the validator options implied by the configuration.
    pub fn validate_options(&self) -> ValidateOptions<f64> {
        ValidateOptions::default().with_epsilon(self.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("ringcheck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-e", "paris_france"]);
        assert_eq!(config.maps_root, PathBuf::from("maps/android"));
        assert_eq!(config.limit, 20);
        assert_eq!(config.epsilon, 1e-12);
        assert!(!config.all_features);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_event_path_layout() {
        let config = parse(&["--event", "paris_france", "--repo-root", "/repo"]);
        assert_eq!(
            config.geojson_path().unwrap(),
            Path::new("/repo/maps/android/paris_france/src/main/assets/paris_france.geojson")
        );
    }

    #[test]
    fn test_file_overrides_event_layout() {
        let config = parse(&["--file", "/tmp/boundary.geojson", "--limit", "3"]);
        assert_eq!(config.geojson_path().unwrap(), PathBuf::from("/tmp/boundary.geojson"));
        assert_eq!(config.limit, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_and_event_conflict() {
        let result = Config::try_parse_from(["ringcheck", "-e", "x", "--file", "y.geojson"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_input() {
        let config = parse(&[]);
        assert!(matches!(config.validate(), Err(RingCheckError::Config(_))));
        assert!(config.geojson_path().is_err());
    }

    #[test]
    fn test_rejects_non_positive_epsilon() {
        let config = parse(&["-e", "x", "--epsilon", "0"]);
        assert!(config.validate().is_err());
        let config = parse(&["-e", "x", "--epsilon", "1e-6"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.validate_options().epsilon, 1e-6);
    }
}
