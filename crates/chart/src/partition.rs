//! The nearest-point planar partition behind hover hit-testing.
//!
//! Every rendered point owns the convex region of the drawing surface
//! that is closer to it than to any other point. A cell starts out as the
//! whole surface rectangle and is clipped by the perpendicular-bisector
//! half-plane against each other site in turn.

/// A convex hover region owned by the site at `index` in the site list.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The index of the owning site.
    pub index: usize,
    /// The region outline, in traversal order. Empty when the site owns
    /// no part of the surface.
    pub vertices: Vec<(f64, f64)>,
}

/// Partitions the `(0, 0)` to `(width, height)` rectangle among `sites`.
///
/// Sites at identical coordinates do not clip each other, and sites with
/// non-finite coordinates clip nothing, so the result always holds one
/// cell per site.
pub fn partition(sites: &[(f64, f64)], width: f64, height: f64) -> Vec<Cell> {
    sites
        .iter()
        .enumerate()
        .map(|(index, &site)| {
            let mut vertices = vec![(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)];

            for (other_index, &other) in sites.iter().enumerate() {
                if other_index == index || other == site {
                    continue;
                }
                if !other.0.is_finite() || !other.1.is_finite() {
                    continue;
                }

                vertices = clip_half_plane(&vertices, site, other);
                if vertices.is_empty() {
                    break;
                }
            }

            Cell { index, vertices }
        })
        .collect()
}

/// Keeps the part of `outline` lying on `site`'s side of the
/// perpendicular bisector between `site` and `other`.
fn clip_half_plane(
    outline: &[(f64, f64)],
    site: (f64, f64),
    other: (f64, f64),
) -> Vec<(f64, f64)> {
    let mid = ((site.0 + other.0) / 2.0, (site.1 + other.1) / 2.0);
    let normal = (other.0 - site.0, other.1 - site.1);

    // Negative on the site's side of the bisector, positive on the
    // other's.
    let side = |p: (f64, f64)| (p.0 - mid.0) * normal.0 + (p.1 - mid.1) * normal.1;

    let mut clipped = Vec::with_capacity(outline.len() + 1);

    for index in 0..outline.len() {
        let current = outline[index];
        let next = outline[(index + 1) % outline.len()];
        let side_current = side(current);
        let side_next = side(next);

        if side_current <= 0.0 {
            clipped.push(current);
        }

        let crosses = (side_current < 0.0 && side_next > 0.0)
            || (side_current > 0.0 && side_next < 0.0);
        if crosses {
            let t = side_current / (side_current - side_next);
            clipped.push((
                current.0 + t * (next.0 - current.0),
                current.1 + t * (next.1 - current.1),
            ));
        }
    }

    clipped
}
