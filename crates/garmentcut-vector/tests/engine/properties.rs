use super::fixtures::points;
use garmentcut_core::{Point, RepairKind};
use garmentcut_vector::geometry::{chain_points, polygon_area};
use garmentcut_vector::simplify::{simplify_points, SimplifyParameters};
use garmentcut_vector::{is_path_closed, repair_path, RepairParameters};
use proptest::prelude::*;

fn closed_chain(vertices: &[Point]) -> Vec<garmentcut_core::PathSegment> {
    let mut pts = vertices.to_vec();
    pts.push(vertices[0]);
    chain_points(&pts)
}

fn gapped_square(gap: f64) -> Vec<garmentcut_core::PathSegment> {
    chain_points(&points(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (0.0, gap),
    ]))
}

proptest! {
    #[test]
    fn area_invariant_under_rotation(
        coords in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 3..12),
        shift in 0usize..12,
    ) {
        let vertices: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let mut rotated = vertices.clone();
        rotated.rotate_left(shift % vertices.len());

        let a = polygon_area(&closed_chain(&vertices));
        let b = polygon_area(&closed_chain(&rotated));
        prop_assert!((a - b).abs() <= 1e-6, "{} != {}", a, b);
    }

    #[test]
    fn simplifier_idempotent_on_simple_paths(
        steps in prop::collection::vec((0.0f64..std::f64::consts::TAU, 0.6f64..20.0), 1..30),
    ) {
        let mut pts = vec![Point::new(0.0, 0.0)];
        for (angle, len) in steps {
            let last = pts[pts.len() - 1];
            pts.push(Point::new(last.x + len * angle.cos(), last.y + len * angle.sin()));
        }

        let params = SimplifyParameters::default();
        let once = simplify_points(&pts, &params);
        let twice = simplify_points(&once, &params);
        prop_assert_eq!(&once, &pts);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn single_small_gap_closed_with_one_repair(gap in 0.2f64..4.9) {
        let params = RepairParameters::default();
        let outcome = repair_path(&gapped_square(gap), &params);

        prop_assert_eq!(outcome.repairs.len(), 1);
        prop_assert_eq!(outcome.repairs[0].kind, RepairKind::Gap);
        prop_assert!((outcome.repairs[0].distance - gap).abs() < 1e-9);
        prop_assert!(is_path_closed(&outcome.segments, params.gap_epsilon));
    }
}

#[test]
fn gap_beyond_limit_left_open() {
    let params = RepairParameters::default();
    let outcome = repair_path(&gapped_square(6.0), &params);
    assert!(outcome.repairs.is_empty());
    assert!(!is_path_closed(&outcome.segments, params.gap_epsilon));
}

#[test]
fn gap_within_epsilon_counts_as_closed() {
    let params = RepairParameters::default();
    let outcome = repair_path(&gapped_square(0.05), &params);
    assert!(outcome.repairs.is_empty());
    assert!(is_path_closed(&outcome.segments, params.gap_epsilon));
}
