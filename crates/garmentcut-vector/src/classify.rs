//! Contour classification
//!
//! Decides which closed paths are exterior cutting contours, which are
//! interior holes and which are negligible notches. Classification is done
//! per batch because containment depends on the other candidates.

use crate::error::{ParameterError, ParameterResult};
use crate::geometry::{bounding_box, chain_vertices, path_length, point_in_polygon, polygon_area};
use garmentcut_core::{ContourAnalysis, PathSegment, SegmentKind, VectorPath};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyParameters {
    /// Paths shorter than this are notches (mm)
    pub notch_max_length: f64,
    /// Paths shorter than this are interior (mm)
    pub exterior_min_length: f64,
    /// Paths enclosing less than this are interior (mm²)
    pub exterior_min_area: f64,
    /// Non-exterior paths must be longer than this to survive filtering (mm)
    pub significance_min_length: f64,
}

impl Default for ClassifyParameters {
    fn default() -> Self {
        Self {
            notch_max_length: 10.0,
            exterior_min_length: 50.0,
            exterior_min_area: 100.0,
            significance_min_length: 10.0,
        }
    }
}

impl ClassifyParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        let checks = [
            ("notch_max_length", self.notch_max_length),
            ("exterior_min_length", self.exterior_min_length),
            ("exterior_min_area", self.exterior_min_area),
            ("significance_min_length", self.significance_min_length),
        ];
        for (name, value) in checks {
            if !(0.0..=1.0e6).contains(&value) {
                return Err(ParameterError::OutOfRange {
                    name: name.to_string(),
                    value,
                    min: 0.0,
                    max: 1.0e6,
                });
            }
        }
        Ok(())
    }
}

/// Length based analysis of a single contour
pub fn analyze_contour(segments: &[PathSegment], params: &ClassifyParameters) -> ContourAnalysis {
    let length = path_length(segments);
    let area = polygon_area(segments);

    ContourAnalysis {
        is_notch: length < params.notch_max_length,
        is_interior: length < params.exterior_min_length || area < params.exterior_min_area,
        length,
    }
}

/// Classify a batch of paths in place.
///
/// Fills in `bounding_box`, `area` and `is_exterior`, retags every segment
/// with its contour kind, and returns the per-path analysis in input order.
pub fn classify_paths(paths: &mut [VectorPath], params: &ClassifyParameters) -> Vec<ContourAnalysis> {
    for path in paths.iter_mut() {
        path.bounding_box = bounding_box(&path.segments);
        path.area = polygon_area(&path.segments);
    }

    let analyses: Vec<ContourAnalysis> = paths
        .iter()
        .map(|p| analyze_contour(&p.segments, params))
        .collect();

    let mut exterior: Vec<bool> = analyses
        .iter()
        .map(|a| !a.is_notch && !a.is_interior)
        .collect();

    for (i, candidate) in paths.iter().enumerate() {
        if !exterior[i] {
            continue;
        }
        let Some(probe) = candidate.first_vertex() else {
            continue;
        };

        let contained = paths.iter().enumerate().any(|(j, other)| {
            j != i
                && other.area > candidate.area
                && other.bounding_box.contains(&candidate.bounding_box)
                && point_in_polygon(&probe, &chain_vertices(&other.segments))
        });

        if contained {
            debug!("{} lies inside a larger contour, not exterior", candidate.id);
            exterior[i] = false;
        }
    }

    for ((path, analysis), is_exterior) in paths.iter_mut().zip(&analyses).zip(exterior) {
        path.is_exterior = is_exterior;
        let kind = if is_exterior {
            SegmentKind::Exterior
        } else if analysis.is_notch {
            SegmentKind::Notch
        } else {
            SegmentKind::Interior
        };
        for segment in path.segments.iter_mut() {
            segment.kind = kind;
        }
    }

    analyses
}

/// Whether a classified path survives the significance filter
pub fn is_significant(path: &VectorPath, analysis: &ContourAnalysis, params: &ClassifyParameters) -> bool {
    path.is_exterior || analysis.length > params.significance_min_length
}
