use garmentcut_core::Point;

/// DXF text for one POLYLINE entity terminated by SEQEND
pub fn polyline(points: &[(f64, f64)]) -> String {
    let mut out = String::from("  0\nPOLYLINE\n  8\nCUT\n");
    for (x, y) in points {
        out.push_str(&format!(" 10\n{}\n 20\n{}\n", x, y));
    }
    out.push_str("  0\nSEQEND\n");
    out
}

/// Closed axis-aligned square, first point repeated at the end
pub fn square(x: f64, y: f64, size: f64) -> Vec<(f64, f64)> {
    vec![
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ]
}

pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
