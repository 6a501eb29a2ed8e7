//! SVG preview of processed cut paths
//!
//! Pieces are drawn in their status colour; repairs are overlaid in gold so
//! the operator can check every synthetic edit before cutting.

use crate::geometry::bounding_box;
use garmentcut_core::{BoundingBox, RepairKind, VectorPath};
use std::fmt::Write;

const REPAIR_COLOR: &str = "#ffd700";
const FALLBACK_VIEW_BOX: &str = "0 0 100 100";

/// Preview rendering options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRenderOptions {
    /// Overlay repair markers
    pub show_repairs: bool,
    /// Padding around the combined extent of all paths
    pub padding: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            show_repairs: true,
            padding: 10.0,
        }
    }
}

/// SVG path data for one piece: `M` to the first start, `L` to every
/// segment end, closed with `Z`
pub fn path_to_svg_data(path: &VectorPath) -> String {
    let Some(first) = path.segments.first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.start.x, first.start.y);
    for segment in &path.segments {
        let _ = write!(d, " L {} {}", segment.end.x, segment.end.y);
    }
    d.push_str(" Z");
    d
}

/// Combined extent of every segment endpoint across all paths
pub fn paths_extent(paths: &[VectorPath]) -> BoundingBox {
    let mut extent = BoundingBox::empty();
    for path in paths {
        extent.union(&bounding_box(&path.segments));
    }
    extent
}

/// SVG `viewBox` covering all paths plus `padding` on every side
pub fn calculate_view_box(paths: &[VectorPath], padding: f64) -> String {
    let extent = paths_extent(paths);
    if extent.is_empty() {
        return FALLBACK_VIEW_BOX.to_string();
    }

    let view = extent.padded(padding);
    format!(
        "{} {} {} {}",
        view.min_x,
        view.min_y,
        view.width(),
        view.height()
    )
}

/// Render a complete SVG document for the processed paths
pub fn render_svg(paths: &[VectorPath], options: &SvgRenderOptions) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" preserveAspectRatio="xMidYMid meet">"#,
        calculate_view_box(paths, options.padding)
    );

    for path in paths {
        let color = path.status.color();
        let stroke_width = if path.is_exterior { 2 } else { 1 };

        let _ = writeln!(svg, r#"  <g id="{}" data-status="{}">"#, path.id, path.status);
        let _ = writeln!(
            svg,
            r#"    <path d="{}" fill="{}" fill-opacity="0.2" stroke="{}" stroke-width="{}"/>"#,
            path_to_svg_data(path),
            color,
            color,
            stroke_width
        );

        if options.show_repairs {
            for repair in &path.repairs {
                match repair.kind {
                    RepairKind::Gap => {
                        let _ = writeln!(
                            svg,
                            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1" stroke-dasharray="4"/>"#,
                            repair.start.x, repair.start.y, repair.end.x, repair.end.y, REPAIR_COLOR
                        );
                    }
                    RepairKind::Intersection => {
                        let _ = writeln!(
                            svg,
                            r#"    <circle cx="{}" cy="{}" r="2" fill="{}"/>"#,
                            repair.start.x, repair.start.y, REPAIR_COLOR
                        );
                    }
                }
            }
        }

        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}
