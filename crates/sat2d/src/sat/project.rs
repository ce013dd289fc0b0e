use nalgebra::{Unit, Vector2};

use crate::geom2::{Interval, Polygon};

/// Extent of `poly` along `axis`: min/max of `v · axis` over all vertices.
///
/// The `Unit` wrapper is the precondition: only unit axes give overlap depths
/// that can be compared across axes.
pub fn project(poly: &Polygon, axis: &Unit<Vector2<f64>>) -> Interval {
    let verts = poly.vertices();
    let first = axis.dot(&verts[0]);
    let (min, max) = verts.iter().fold((first, first), |(lo, hi), v| {
        let p = axis.dot(v);
        (lo.min(p), hi.max(p))
    });
    Interval::new(min, max)
}
