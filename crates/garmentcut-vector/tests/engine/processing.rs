use super::fixtures::{polyline, square};
use garmentcut_core::{PieceStatus, RepairKind, SegmentKind};
use garmentcut_vector::{VectorFileProcessor, VectorProcessingParameters};

#[test]
fn test_closed_square_needs_no_repair() {
    let result = VectorFileProcessor::default().process(&polyline(&square(0.0, 0.0, 10.0)));

    assert_eq!(result.paths.len(), 1);
    let path = &result.paths[0];
    assert_eq!(path.id, "piece-1");
    assert!(path.repairs.is_empty());
    assert!(!path.is_open);
    assert_eq!(path.area, 100.0);
    assert_eq!(path.status, PieceStatus::Uncut);
}

#[test]
fn test_square_with_closing_gap() {
    let mut pts = square(0.0, 0.0, 10.0);
    pts.pop();
    pts.push((0.0, 2.0));

    let result = VectorFileProcessor::default().process(&polyline(&pts));

    assert_eq!(result.paths.len(), 1);
    let path = &result.paths[0];
    assert_eq!(path.repairs.len(), 1);
    assert_eq!(path.repairs[0].kind, RepairKind::Gap);
    assert!((path.repairs[0].distance - 2.0).abs() < 1e-9);
    assert!(path.is_open);
    assert!((path.area - 100.0).abs() < 1e-9);
    assert_eq!(path.repair_segment_count(), 1);

    assert!(result
        .diagnostics
        .contains(&"Closed gap between nodes [0.00,2.00] and [0.00,0.00] (distance: 2.00mm)".to_string()));
    assert_eq!(result.summary.gap_repairs, 1);
    assert_eq!(result.summary.open_after_repair, 0);
}

#[test]
fn test_large_gap_stays_open() {
    let mut pts = square(0.0, 0.0, 30.0);
    pts.pop();
    pts.push((0.0, 6.0));

    let result = VectorFileProcessor::default().process(&polyline(&pts));

    assert_eq!(result.paths.len(), 1);
    assert!(result.paths[0].repairs.is_empty());
    assert_eq!(result.summary.open_after_repair, 1);
    assert_eq!(result.diagnostics.last().unwrap(), "1 paths remain open");
}

#[test]
fn test_force_close_repairs_large_gap() {
    let mut pts = square(0.0, 0.0, 30.0);
    pts.pop();
    pts.push((0.0, 6.0));

    let mut params = VectorProcessingParameters::default();
    params.repair.force_close = true;
    let result = VectorFileProcessor::new(params)
        .unwrap()
        .process(&polyline(&pts));

    assert_eq!(result.paths[0].repairs.len(), 1);
    assert!((result.paths[0].repairs[0].distance - 6.0).abs() < 1e-9);
    assert_eq!(result.summary.open_after_repair, 0);
}

#[test]
fn test_nested_squares() {
    let mut content = polyline(&square(0.0, 0.0, 100.0));
    content.push_str(&polyline(&square(45.0, 45.0, 10.0)));

    let result = VectorFileProcessor::default().process(&content);

    assert_eq!(result.paths.len(), 2);
    let big = &result.paths[0];
    let small = &result.paths[1];
    assert_eq!(big.area, 10000.0);
    assert_eq!(small.area, 100.0);
    assert!(big.is_exterior);
    assert!(!small.is_exterior);
    assert!(small.segments.iter().all(|s| s.kind == SegmentKind::Interior));
    assert_eq!(result.summary.exterior, 1);
    assert_eq!(result.diagnostics[0], "Processed 2 pieces (1 exterior).");
}

#[test]
fn test_ids_skip_rejected_notches() {
    let mut content = polyline(&square(0.0, 0.0, 100.0));
    content.push_str(&polyline(&square(300.0, 0.0, 1.0)));
    content.push_str(&polyline(&square(200.0, 0.0, 20.0)));

    let result = VectorFileProcessor::default().process(&content);

    let ids: Vec<&str> = result.paths.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["piece-1", "piece-2"]);
    assert_eq!(result.summary.entities, 3);
    assert_eq!(result.summary.rejected_notches, 1);
    assert!(result.paths.iter().all(|p| p.is_exterior));
}

#[test]
fn test_short_entities_skipped() {
    let content = "LINE\n10\n1\n20\n1\nSEQEND\n".to_string() + &polyline(&square(0.0, 0.0, 20.0));
    let result = VectorFileProcessor::default().process(&content);
    assert_eq!(result.summary.entities, 2);
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.paths[0].id, "piece-1");
}

#[test]
fn test_self_intersection_reported() {
    let bow_tie = [(0.0, 0.0), (40.0, 40.0), (40.0, 0.0), (0.0, 40.0), (0.0, 0.0)];
    let result = VectorFileProcessor::default().process(&polyline(&bow_tie));

    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.summary.intersection_repairs, 1);
    assert!(result
        .diagnostics
        .contains(&"Fixed intersection at [20.00,20.00]".to_string()));
}

#[test]
fn test_orphan_y_yields_empty_result() {
    let content = "POLYLINE\n20\n5\n10\n5\nSEQEND\n".to_string() + &polyline(&square(0.0, 0.0, 20.0));
    let result = VectorFileProcessor::default().process(&content);

    assert!(result.is_error());
    assert!(result.paths.is_empty());
    assert!(result.diagnostics[0].contains("Y coordinate without a preceding X"));
}

#[test]
fn test_malformed_coordinate_propagates_nan() {
    let content = "POLYLINE\n10\n0\n20\n0\n10\n30\n20\n0\n10\n30\n20\n30\n10\n0\n20\n30\n10\nabc\n20\n0\nSEQEND\n";
    let result = VectorFileProcessor::default().process(content);

    assert!(!result.is_error());
    assert_eq!(result.paths.len(), 1);
    assert!(result.paths[0].segments.iter().any(|s| s.end.is_nan()));
    assert_eq!(result.summary.open_after_repair, 1);
}

#[test]
fn test_strict_mode_rejects_entity() {
    let mut content = "POLYLINE\n10\n0\n20\n0\n10\n1,5\n20\n0\nSEQEND\n".to_string();
    content.push_str(&polyline(&square(0.0, 0.0, 20.0)));

    let params = VectorProcessingParameters {
        strict_numbers: true,
        ..Default::default()
    };
    let result = VectorFileProcessor::new(params).unwrap().process(&content);

    assert_eq!(result.summary.rejected_entities, 1);
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.diagnostics[0], "Rejected entity 1: malformed coordinate '1,5'");
}

#[test]
fn test_strict_mode_rejects_non_finite_tokens() {
    let mut content =
        "POLYLINE\n10\n0\n20\n0\n10\nNaN\n20\n0\n10\n30\n20\n30\n10\n0\n20\n30\n10\n0\n20\n0\nSEQEND\n"
            .to_string();
    content.push_str(
        "POLYLINE\n10\n0\n20\n0\n10\n30\n20\ninf\n10\n30\n20\n30\n10\n0\n20\n30\n10\n0\n20\n0\nSEQEND\n",
    );
    content.push_str(&polyline(&square(50.0, 0.0, 20.0)));

    let params = VectorProcessingParameters {
        strict_numbers: true,
        ..Default::default()
    };
    let result = VectorFileProcessor::new(params).unwrap().process(&content);

    assert_eq!(result.summary.rejected_entities, 2);
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.paths[0].area, 400.0);
    assert_eq!(result.diagnostics[0], "Rejected entity 1: malformed coordinate 'NaN'");
    assert_eq!(result.diagnostics[1], "Rejected entity 2: malformed coordinate 'inf'");
}

#[test]
fn test_process_bytes_matches_process() {
    let content = polyline(&square(0.0, 0.0, 20.0));
    let processor = VectorFileProcessor::default();
    assert_eq!(processor.process_bytes(content.as_bytes()), processor.process(&content));
}

#[test]
fn test_result_serializes_to_json() {
    let result = VectorFileProcessor::default().process(&polyline(&square(0.0, 0.0, 20.0)));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["summary"]["paths"], 1);
    assert_eq!(json["paths"][0]["id"], "piece-1");
    assert_eq!(json["paths"][0]["status"], "uncut");
    assert_eq!(json["paths"][0]["isExterior"], true);
    assert_eq!(json["paths"][0]["segments"][0]["type"], "exterior");
    assert!(json.get("error").is_none());
}
