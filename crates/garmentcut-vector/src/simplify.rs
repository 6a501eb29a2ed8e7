//! Path simplification
//!
//! Drops near-collinear and near-duplicate points from an ordered segment
//! chain in a single left-to-right pass.

use crate::error::{ParameterError, ParameterResult};
use crate::geometry::{chain_points, distance};
use garmentcut_core::{PathSegment, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Simplifier thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyParameters {
    /// Minimum turning angle (radians) that keeps a point
    pub angle_threshold: f64,
    /// Minimum distance from the previous kept point that keeps a point
    pub distance_threshold: f64,
}

impl Default for SimplifyParameters {
    fn default() -> Self {
        Self {
            angle_threshold: 0.1,
            distance_threshold: 0.5,
        }
    }
}

impl SimplifyParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        if !(0.0..=std::f64::consts::PI).contains(&self.angle_threshold) {
            return Err(ParameterError::OutOfRange {
                name: "angle_threshold".to_string(),
                value: self.angle_threshold,
                min: 0.0,
                max: std::f64::consts::PI,
            });
        }
        if !(0.0..=100.0).contains(&self.distance_threshold) {
            return Err(ParameterError::OutOfRange {
                name: "distance_threshold".to_string(),
                value: self.distance_threshold,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(())
    }
}

/// Absolute turning angle at `curr` between edges prev->curr and curr->next
pub fn turning_angle(prev: &Point, curr: &Point, next: &Point) -> f64 {
    let (ax, ay) = (curr.x - prev.x, curr.y - prev.y);
    let (bx, by) = (next.x - curr.x, next.y - curr.y);
    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross.atan2(dot).abs()
}

/// Ordered point sequence of a chain: every start plus the final end
pub fn chain_to_points(segments: &[PathSegment]) -> Vec<Point> {
    let mut points: Vec<Point> = segments.iter().map(|s| s.start).collect();
    if let Some(last) = segments.last() {
        points.push(last.end);
    }
    points
}

/// Simplify a point sequence. First and last points are always kept.
pub fn simplify_points(points: &[Point], params: &SimplifyParameters) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);

    for i in 1..points.len() - 1 {
        let prev = kept[kept.len() - 1];
        let curr = points[i];
        let next = points[i + 1];

        let angle = turning_angle(&prev, &curr, &next);
        if angle > params.angle_threshold || distance(&prev, &curr) > params.distance_threshold {
            kept.push(curr);
        }
    }

    kept.push(points[points.len() - 1]);
    kept
}

/// Simplify a segment chain. The result is rebuilt from the kept points as
/// plain exterior segments.
pub fn simplify_path(segments: &[PathSegment], params: &SimplifyParameters) -> Vec<PathSegment> {
    if segments.len() < 2 {
        return segments.to_vec();
    }

    let points = chain_to_points(segments);
    let kept = simplify_points(&points, params);

    debug!(
        "Simplified chain from {} to {} points",
        points.len(),
        kept.len()
    );

    chain_points(&kept)
}
