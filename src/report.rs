//! Per-ring analysis of whole geometries and the text report printed by the
//! command-line tool.

use crate::geojson::PolygonCoords;
use crate::polygon::{find_self_intersections, Ring, RingReport, ValidateOptions};
use std::fmt::{self, Write};
use tracing::warn;

/// Default number of intersections listed per ring.
pub const DEFAULT_LIMIT: usize = 20;

/// The analysis of one ring, located within its feature and polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct RingAnalysis {
    /// Feature index within the collection.
    pub feature: usize,
    /// Polygon index within the feature's geometry.
    pub polygon: usize,
    /// Ring index within the polygon (0 is the outer boundary).
    pub ring: usize,
    /// Number of positions as read, before the ring is closed.
    pub points: usize,
    pub report: RingReport<f64>,
}

impl RingAnalysis {
    /// Writes the report lines for this ring, listing at most `limit`
    /// intersections.
    pub fn write_to<W: Write>(&self, out: &mut W, limit: usize) -> fmt::Result {
        writeln!(
            out,
            "Analyzing polygon {} ring {} with {} points...",
            self.polygon, self.ring, self.points
        )?;
        writeln!(
            out,
            " - candidate pairs tested: {}, time: {:.2}s",
            self.report.tested_pairs,
            self.report.elapsed.as_secs_f64()
        )?;

        if !self.report.has_self_intersections() {
            return writeln!(out, " - no self-intersections found");
        }

        writeln!(
            out,
            " - self-intersections found: {} (showing first {})",
            self.report.intersections.len(),
            limit
        )?;
        for hit in self.report.intersections.iter().take(limit) {
            writeln!(
                out,
                "   * edges {}-{} and {}-{}",
                hit.edge1,
                hit.edge1 + 1,
                hit.edge2,
                hit.edge2 + 1
            )?;
            writeln!(out, "     ({})-({}) X ({})-({})", hit.a, hit.b, hit.c, hit.d)?;
        }
        Ok(())
    }
}

/// The analyses of every ring of one or more geometries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryReport {
    pub rings: Vec<RingAnalysis>,
    /// Features left out because their geometry has no rings to check.
    pub skipped_features: Vec<usize>,
}

impl GeometryReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes every ring of `polygons`, attributing them to `feature`.
    ///
    /// Rings are independent: holes are not checked against their outer
    /// boundary.
    pub fn add_polygons(
        &mut self,
        feature: usize,
        polygons: &[PolygonCoords],
        options: &ValidateOptions<f64>,
    ) {
        for (pi, polygon) in polygons.iter().enumerate() {
            for (ri, positions) in polygon.iter().enumerate() {
                let ring = Ring::new(positions.clone());
                let report = find_self_intersections(&ring, options);

                if report.has_self_intersections() {
                    warn!(
                        feature,
                        polygon = pi,
                        ring = ri,
                        intersections = report.intersections.len(),
                        "ring is self-intersecting"
                    );
                }

                self.rings.push(RingAnalysis {
                    feature,
                    polygon: pi,
                    ring: ri,
                    points: positions.len(),
                    report,
                });
            }
        }
    }

    /// Analyzes the rings of a single feature's polygons.
    pub fn analyze_polygons(polygons: &[PolygonCoords], options: &ValidateOptions<f64>) -> Self {
        let mut report = Self::new();
        report.add_polygons(0, polygons, options);
        report
    }

    /// Returns `true` if any ring has a self-intersection.
    pub fn has_self_intersections(&self) -> bool {
        self.rings.iter().any(|r| r.report.has_self_intersections())
    }

    /// Total number of self-intersections across all rings.
    pub fn intersection_count(&self) -> usize {
        self.rings.iter().map(|r| r.report.intersections.len()).sum()
    }

    /// Total number of candidate pairs tested across all rings.
    pub fn tested_pairs(&self) -> usize {
        self.rings.iter().map(|r| r.report.tested_pairs).sum()
    }

    /// Writes the text report.
    ///
    /// When more than one feature was analyzed, each feature's rings are
    /// preceded by a `Feature N` header.
    pub fn write_to<W: Write>(&self, out: &mut W, limit: usize) -> fmt::Result {
        let multi_feature = self.rings.iter().any(|r| r.feature != 0);
        let mut current = None;

        for ring in &self.rings {
            if multi_feature && current != Some(ring.feature) {
                writeln!(out, "Feature {}", ring.feature)?;
                current = Some(ring.feature);
            }
            ring.write_to(out, limit)?;
        }
        Ok(())
    }

    /// Renders the text report into a string.
    pub fn render(&self, limit: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, limit)
            .expect("writing to a String cannot fail");
        out
    }
}
