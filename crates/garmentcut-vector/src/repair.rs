//! Path repair
//!
//! Heals small defects in a segment chain. Strategies run in a fixed order:
//! sequential gap closing, self-intersection splitting, then the optional
//! force-close fallback. Every synthetic edit is logged as a [`PathRepair`].

use crate::error::{ParameterError, ParameterResult};
use crate::geometry::{distance, segment_intersection};
use garmentcut_core::{PathRepair, PathSegment, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Upper bound on intersection splits for a single chain
const MAX_INTERSECTION_SPLITS: usize = 1024;

/// Repair tolerances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairParameters {
    /// Gaps at or below this distance already count as closed (mm)
    pub gap_epsilon: f64,
    /// Gaps at or above this distance are real breaks and left open (mm)
    pub max_repair_distance: f64,
    /// Bridge the last end to the first start when the chain is still open
    pub force_close: bool,
}

impl Default for RepairParameters {
    fn default() -> Self {
        Self {
            gap_epsilon: 0.1,
            max_repair_distance: 5.0,
            force_close: false,
        }
    }
}

impl RepairParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        if !(0.0..=10.0).contains(&self.gap_epsilon) {
            return Err(ParameterError::OutOfRange {
                name: "gap_epsilon".to_string(),
                value: self.gap_epsilon,
                min: 0.0,
                max: 10.0,
            });
        }
        if !(0.0..=1000.0).contains(&self.max_repair_distance) {
            return Err(ParameterError::OutOfRange {
                name: "max_repair_distance".to_string(),
                value: self.max_repair_distance,
                min: 0.0,
                max: 1000.0,
            });
        }
        if self.max_repair_distance <= self.gap_epsilon {
            return Err(ParameterError::Incompatible(format!(
                "max_repair_distance ({}) must exceed gap_epsilon ({})",
                self.max_repair_distance, self.gap_epsilon
            )));
        }
        Ok(())
    }
}

/// Result of repairing one chain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepairOutcome {
    pub segments: Vec<PathSegment>,
    pub repairs: Vec<PathRepair>,
}

impl RepairOutcome {
    pub fn is_closed(&self, params: &RepairParameters) -> bool {
        is_path_closed(&self.segments, params.gap_epsilon)
    }
}

/// True when every cyclic junction of the chain is within `gap_epsilon`.
/// Chains with fewer than two segments are never closed.
pub fn is_path_closed(segments: &[PathSegment], gap_epsilon: f64) -> bool {
    let n = segments.len();
    if n < 2 {
        return false;
    }

    (0..n).all(|i| distance(&segments[i].end, &segments[(i + 1) % n].start) <= gap_epsilon)
}

/// Run every repair strategy over a segment chain
pub fn repair_path(segments: &[PathSegment], params: &RepairParameters) -> RepairOutcome {
    let mut outcome = RepairOutcome {
        segments: segments.to_vec(),
        repairs: Vec::new(),
    };

    close_gaps(&mut outcome, params);
    split_intersections(&mut outcome, params);

    if params.force_close {
        force_close(&mut outcome, params);
    }

    outcome
}

fn close_gaps(outcome: &mut RepairOutcome, params: &RepairParameters) {
    let segs = &mut outcome.segments;
    let mut i = 0;

    while i < segs.len() {
        let n = segs.len();
        let end = segs[i].end;
        let next_start = segs[(i + 1) % n].start;
        let gap = distance(&end, &next_start);

        if gap > params.gap_epsilon && gap < params.max_repair_distance {
            debug!("Bridging gap of {:.3}mm after segment {}", gap, i);
            segs.insert(i + 1, PathSegment::repair(end, next_start));
            outcome.repairs.push(PathRepair::gap(end, next_start, gap));
            // Skip the bridge just inserted
            i += 1;
        } else if gap >= params.max_repair_distance {
            warn!(
                "Gap of {:.3}mm after segment {} exceeds repair limit, left open",
                gap, i
            );
        }

        i += 1;
    }
}

fn touches_endpoint(segment: &PathSegment, p: &Point, epsilon: f64) -> bool {
    distance(&segment.start, p) <= epsilon || distance(&segment.end, p) <= epsilon
}

/// First proper crossing whose lower segment index is at least `from`
fn find_crossing(segs: &[PathSegment], from: usize, epsilon: f64) -> Option<(usize, usize, Point)> {
    let n = segs.len();
    for i in from..n {
        for j in (i + 2)..n {
            // Closed chains end where they start; that touch is skipped below
            if let Some(p) = segment_intersection(&segs[i], &segs[j]) {
                if touches_endpoint(&segs[i], &p, epsilon) || touches_endpoint(&segs[j], &p, epsilon)
                {
                    continue;
                }
                return Some((i, j, p));
            }
        }
    }
    None
}

fn split_at(segs: &mut Vec<PathSegment>, index: usize, at: Point) {
    let original = segs[index];
    segs[index] = PathSegment::repair(original.start, at);
    segs.insert(index + 1, PathSegment::repair(at, original.end));
}

fn split_intersections(outcome: &mut RepairOutcome, params: &RepairParameters) {
    let mut splits = 0;
    let mut from = 0;

    while let Some((i, j, p)) = find_crossing(&outcome.segments, from, params.gap_epsilon) {
        if splits >= MAX_INTERSECTION_SPLITS {
            warn!(
                "Stopped splitting self-intersections after {} splits",
                MAX_INTERSECTION_SPLITS
            );
            break;
        }

        debug!("Splitting segments {} and {} at {}", i, j, p);
        // Higher index first so `i` stays valid
        split_at(&mut outcome.segments, j, p);
        split_at(&mut outcome.segments, i, p);
        outcome.repairs.push(PathRepair::intersection(p));
        splits += 1;
        // Segments before `i` were already clear of every other segment
        from = i;
    }
}

fn force_close(outcome: &mut RepairOutcome, params: &RepairParameters) {
    if is_path_closed(&outcome.segments, params.gap_epsilon) {
        return;
    }
    let (Some(first), Some(last)) = (outcome.segments.first(), outcome.segments.last()) else {
        return;
    };

    let start = last.end;
    let end = first.start;
    let gap = distance(&start, &end);
    if gap > params.gap_epsilon {
        debug!("Force-closing chain across {:.3}mm", gap);
        outcome.segments.push(PathSegment::repair(start, end));
        outcome.repairs.push(PathRepair::gap(start, end, gap));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::chain_points;
    use garmentcut_core::RepairKind;

    fn chain(coords: &[(f64, f64)]) -> Vec<PathSegment> {
        let pts: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        chain_points(&pts)
    }

    #[test]
    fn test_closed_square_untouched() {
        let segs = chain(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let params = RepairParameters::default();
        let out = repair_path(&segs, &params);
        assert!(out.repairs.is_empty());
        assert_eq!(out.segments, segs);
        assert!(out.is_closed(&params));
    }

    #[test]
    fn test_small_gap_closed() {
        let segs = chain(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 2.0)]);
        let params = RepairParameters::default();
        let out = repair_path(&segs, &params);

        assert_eq!(out.repairs.len(), 1);
        assert_eq!(out.repairs[0].kind, RepairKind::Gap);
        assert!((out.repairs[0].distance - 2.0).abs() < 1e-9);
        assert_eq!(out.segments.len(), 5);
        assert!(out.segments[4].is_repair);
        assert!(out.is_closed(&params));
    }

    #[test]
    fn test_gap_inside_chain_bridged_in_place() {
        let mut segs = chain(&[(0.0, 0.0), (10.0, 0.0)]);
        segs.extend(chain(&[(10.0, 1.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]));
        let out = repair_path(&segs, &RepairParameters::default());

        assert_eq!(out.repairs.len(), 1);
        assert!(out.segments[1].is_repair);
        assert_eq!(out.segments[1].start, Point::new(10.0, 0.0));
        assert_eq!(out.segments[1].end, Point::new(10.0, 1.0));
    }

    #[test]
    fn test_large_gap_left_open() {
        let segs = chain(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 6.0)]);
        let params = RepairParameters::default();
        let out = repair_path(&segs, &params);

        assert!(out.repairs.is_empty());
        assert_eq!(out.segments.len(), 4);
        assert!(!out.is_closed(&params));
    }

    #[test]
    fn test_force_close_bridges_large_gap() {
        let segs = chain(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 6.0)]);
        let params = RepairParameters {
            force_close: true,
            ..Default::default()
        };
        let out = repair_path(&segs, &params);

        assert_eq!(out.repairs.len(), 1);
        assert_eq!(out.repairs[0].kind, RepairKind::Gap);
        assert!((out.repairs[0].distance - 6.0).abs() < 1e-9);
        assert!(out.is_closed(&params));
    }

    #[test]
    fn test_self_intersection_split() {
        // Bow tie: the diagonals cross at (5, 5)
        let segs = chain(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]);
        let out = repair_path(&segs, &RepairParameters::default());

        let crossings: Vec<_> = out
            .repairs
            .iter()
            .filter(|r| r.kind == RepairKind::Intersection)
            .collect();
        assert_eq!(crossings.len(), 1);
        assert!((crossings[0].start.x - 5.0).abs() < 1e-9);
        assert!((crossings[0].start.y - 5.0).abs() < 1e-9);
        assert_eq!(crossings[0].distance, 0.0);

        assert_eq!(out.segments.len(), 6);
        assert_eq!(out.segments.iter().filter(|s| s.is_repair).count(), 4);
    }

    #[test]
    fn test_crossing_created_by_gap_bridge_is_split() {
        // The closing bridge (0, 3) -> (0, 0) cuts through the long diagonal
        let segs = chain(&[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0), (-3.0, -1.0), (0.0, 3.0)]);
        let params = RepairParameters::default();
        let out = repair_path(&segs, &params);

        let kinds: Vec<RepairKind> = out.repairs.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RepairKind::Gap, RepairKind::Intersection]);
        assert!((out.repairs[0].distance - 3.0).abs() < 1e-9);

        let crossing = out.repairs[1].start;
        assert!(crossing.x.abs() < 1e-9);
        assert!((crossing.y - 40.0 / 23.0).abs() < 1e-9);
        assert_eq!(out.segments.len(), 7);
        assert!(out.is_closed(&params));
    }

    #[test]
    fn test_chained_crossings_all_split() {
        // Open zig-zag; the final stroke cuts back across the first four
        let segs = chain(&[
            (0.0, 0.0),
            (10.0, 10.0),
            (20.0, -10.0),
            (30.0, 10.0),
            (40.0, -10.0),
            (40.0, 20.0),
            (0.0, 20.0),
            (0.0, 5.0),
            (40.0, 5.0),
        ]);
        let out = repair_path(&segs, &RepairParameters::default());
        let crossings = out
            .repairs
            .iter()
            .filter(|r| r.kind == RepairKind::Intersection)
            .count();
        assert_eq!(crossings, 4);
    }

    #[test]
    fn test_shared_endpoints_not_split() {
        // Triangle whose neighbours only touch at corners
        let segs = chain(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (0.0, 0.0)]);
        let out = repair_path(&segs, &RepairParameters::default());
        assert!(out.repairs.is_empty());
    }

    #[test]
    fn test_is_path_closed() {
        assert!(!is_path_closed(&[], 0.1));
        let single = chain(&[(0.0, 0.0), (0.0, 0.0)]);
        assert!(!is_path_closed(&single, 0.1));
        let nearly = chain(&[(0.0, 0.0), (10.0, 0.0), (0.0, 5.0), (0.05, 0.0)]);
        assert!(is_path_closed(&nearly, 0.1));
    }

    #[test]
    fn test_validate() {
        assert!(RepairParameters::default().validate().is_ok());
        let inverted = RepairParameters {
            gap_epsilon: 2.0,
            max_repair_distance: 1.0,
            force_close: false,
        };
        assert!(matches!(
            inverted.validate(),
            Err(ParameterError::Incompatible(_))
        ));
    }
}
