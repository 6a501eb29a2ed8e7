//! Cut path model
//!
//! A [`VectorPath`] is one candidate cutting piece reconstructed from a DXF
//! entity: an ordered chain of [`PathSegment`]s, the [`PathRepair`]s that
//! were needed to heal it, and the classification computed for the batch.

use super::{BoundingBox, PieceStatus, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a segment in the final cutting plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Outer boundary of a cuttable piece
    #[default]
    Exterior,
    /// Closed loop inside another piece (a hole)
    Interior,
    /// Very short loop, usually an alignment mark or noise
    Notch,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exterior => write!(f, "exterior"),
            Self::Interior => write!(f, "interior"),
            Self::Notch => write!(f, "notch"),
        }
    }
}

/// One straight edge of a cut path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    pub start: Point,
    pub end: Point,
    /// Inserted by the repairer, never present in the source drawing
    #[serde(default)]
    pub is_repair: bool,
    #[serde(rename = "type")]
    pub kind: SegmentKind,
}

impl PathSegment {
    /// A source segment, as read from the drawing
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            is_repair: false,
            kind: SegmentKind::Exterior,
        }
    }

    /// A synthetic segment produced by a repair strategy
    pub fn repair(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            is_repair: true,
            kind: SegmentKind::Exterior,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// The healing operation a repair record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairKind {
    Gap,
    Intersection,
}

/// Audit record of one synthetic edit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRepair {
    pub start: Point,
    pub end: Point,
    pub distance: f64,
    #[serde(rename = "type")]
    pub kind: RepairKind,
}

impl PathRepair {
    pub fn gap(start: Point, end: Point, distance: f64) -> Self {
        Self {
            start,
            end,
            distance,
            kind: RepairKind::Gap,
        }
    }

    pub fn intersection(at: Point) -> Self {
        Self {
            start: at,
            end: at,
            distance: 0.0,
            kind: RepairKind::Intersection,
        }
    }
}

impl fmt::Display for PathRepair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RepairKind::Gap => write!(
                f,
                "Closed gap between nodes {} and {} (distance: {:.2}mm)",
                self.start, self.end, self.distance
            ),
            RepairKind::Intersection => write!(f, "Fixed intersection at {}", self.start),
        }
    }
}

/// Transient per-path measurements used during classification
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContourAnalysis {
    pub is_notch: bool,
    pub is_interior: bool,
    pub length: f64,
}

/// One candidate closed cutting piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorPath {
    /// `piece-<n>`, unique within one processed file
    pub id: String,
    pub segments: Vec<PathSegment>,
    /// The path needed at least one repair when it was built
    pub is_open: bool,
    pub repairs: Vec<PathRepair>,
    pub status: PieceStatus,
    pub is_exterior: bool,
    pub bounding_box: BoundingBox,
    pub area: f64,
}

impl VectorPath {
    /// Build an unclassified path; `is_open` follows from `repairs`
    pub fn new(id: impl Into<String>, segments: Vec<PathSegment>, repairs: Vec<PathRepair>) -> Self {
        let bounding_box = BoundingBox::from_points(segments.iter().flat_map(|s| [&s.start, &s.end]));
        Self {
            id: id.into(),
            is_open: !repairs.is_empty(),
            segments,
            repairs,
            status: PieceStatus::Uncut,
            is_exterior: false,
            bounding_box,
            area: 0.0,
        }
    }

    /// Polygon vertices, one per segment start
    pub fn vertices(&self) -> Vec<Point> {
        self.segments.iter().map(|s| s.start).collect()
    }

    /// The sample vertex used for containment tests
    pub fn first_vertex(&self) -> Option<Point> {
        self.segments.first().map(|s| s.start)
    }

    pub fn repair_segment_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_repair).count()
    }
}
