//! Geometry kernel
//!
//! Stateless 2-D primitives used by every stage of the cut-path pipeline.
//! Polygons are given as segment chains; vertex `i` is `segments[i].start`.

use garmentcut_core::{BoundingBox, PathSegment, Point};

/// Euclidean distance between two points
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.distance_to(p2)
}

/// Ray-casting point-in-polygon test (even-odd rule)
///
/// Points exactly on an edge may land on either side.
pub fn point_in_polygon(point: &Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (vertices[i].x, vertices[i].y);
        let (xj, yj) = (vertices[j].x, vertices[j].y);

        if (yi > point.y) != (yj > point.y) && point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Polygon vertices of a segment chain, one per segment start
pub fn chain_vertices(segments: &[PathSegment]) -> Vec<Point> {
    segments.iter().map(|s| s.start).collect()
}

/// Total length of a segment chain
pub fn path_length(segments: &[PathSegment]) -> f64 {
    segments.iter().map(|s| distance(&s.start, &s.end)).sum()
}

/// Unsigned shoelace area of a segment chain treated as a closed polygon
pub fn polygon_area(segments: &[PathSegment]) -> f64 {
    let n = segments.len();
    if n == 0 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let a = segments[i].start;
        let b = segments[(i + 1) % n].start;
        area += a.x * b.y - b.x * a.y;
    }

    (area / 2.0).abs()
}

/// Intersection point of two segments, if they cross within both spans
///
/// Returns `None` when the determinant is exactly zero. Parallel and
/// collinear overlaps are never reported.
pub fn segment_intersection(seg1: &PathSegment, seg2: &PathSegment) -> Option<Point> {
    let (x1, y1) = (seg1.start.x, seg1.start.y);
    let (x2, y2) = (seg1.end.x, seg1.end.y);
    let (x3, y3) = (seg2.start.x, seg2.start.y);
    let (x4, y4) = (seg2.end.x, seg2.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}

/// Bounding box over every segment endpoint
pub fn bounding_box(segments: &[PathSegment]) -> BoundingBox {
    BoundingBox::from_points(segments.iter().flat_map(|s| [&s.start, &s.end]))
}

/// Connect consecutive points into a segment chain
pub fn chain_points(points: &[Point]) -> Vec<PathSegment> {
    points
        .windows(2)
        .map(|w| PathSegment::new(w[0], w[1]))
        .collect()
}
