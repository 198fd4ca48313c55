use std::fmt::Write;

/// Builds an SVG path in `M x,y L x,y ...` form connecting `points` in
/// order. An empty slice yields an empty path.
pub(crate) fn line(points: &[(f64, f64)]) -> String {
    let mut d = String::new();

    for (index, (x, y)) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command}{x},{y}");
    }

    d
}

/// Builds a closed SVG path around `vertices`.
pub(crate) fn polygon(vertices: &[(f64, f64)]) -> String {
    if vertices.is_empty() {
        return String::new();
    }

    let mut d = line(vertices);
    d.push('Z');
    d
}
