use super::fixtures::{polyline, square};
use garmentcut_core::PieceStatus;
use garmentcut_vector::{
    calculate_view_box, render_svg, CutRegistration, SvgRenderOptions, VectorFileProcessor,
};

#[test]
fn test_view_box_padding_around_processed_paths() {
    let result = VectorFileProcessor::default().process(&polyline(&square(0.0, 0.0, 10.0)));
    assert_eq!(calculate_view_box(&result.paths, 10.0), "-10 -10 30 30");
}

#[test]
fn test_preview_follows_registration() {
    let mut content = polyline(&square(0.0, 0.0, 100.0));
    content.push_str(&polyline(&square(40.0, 40.0, 20.0)));
    let result = VectorFileProcessor::default().process(&content);

    let mut registration = CutRegistration::from_processed(result);
    registration.toggle("piece-1").unwrap();
    registration.toggle("piece-2").unwrap();
    registration.toggle("piece-2").unwrap();

    let svg = render_svg(registration.paths(), &SvgRenderOptions::default());
    assert!(svg.contains(r##"stroke="#22c55e" stroke-width="2""##));
    assert!(svg.contains(r##"stroke="#ef4444" stroke-width="1""##));
}

#[test]
fn test_three_toggles_cycle_back() {
    let result = VectorFileProcessor::default().process(&polyline(&square(0.0, 0.0, 20.0)));
    let mut registration = CutRegistration::from_processed(result);

    let seen: Vec<PieceStatus> = (0..3)
        .map(|_| registration.toggle("piece-1").unwrap())
        .collect();
    assert_eq!(
        seen,
        vec![PieceStatus::Cut, PieceStatus::Defect, PieceStatus::Uncut]
    );
}
