//! Curated flat API surface.
//!
//! Re-exports every engine stage individually, for callers that want to run
//! or inspect the pipeline step by step (axes, intervals, overlaps) instead
//! of the single `collision` query.

// Geometry
pub use crate::geom2::{
    convex_hull, polygon_from_points, GeomCfg, Interval, Polygon, PolygonError,
};
// Samplers
pub use crate::geom2::rand::{
    draw_polygon_radial, regular_polygon, RadialCfg, ReplayToken, VertexCount,
};
// SAT engine
pub use crate::sat::{collision, edge_normals, intersects, project, CollisionResult, Contact};

use nalgebra::{Unit, Vector2};

/// Signed overlap of `p1` and `p2` along the direction of `axis`.
///
/// Returns `None` for a (near) zero axis, which has no direction to project on.
pub fn overlap_along(p1: &Polygon, p2: &Polygon, axis: Vector2<f64>) -> Option<f64> {
    let axis = Unit::try_new(axis, 1e-12)?;
    Some(project(p1, &axis).overlap(&project(p2, &axis)))
}
