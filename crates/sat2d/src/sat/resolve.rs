//! Collision resolver: separating-axis test plus minimum translation vector.
//!
//! Axes are the edge normals of `p1` followed by those of `p2`. Each axis is
//! normalized, both polygons are projected, and the signed interval overlap
//! decides:
//! - overlap > 0: separating axis, return `Separated` immediately;
//! - otherwise `|overlap|` is a penetration depth; the strictly smallest one
//!   wins, so on ties the earliest axis is reported.
//!
//! Touching polygons (best depth exactly 0) are `Colliding` with a zero MTV.
//!
//! Code cross-refs: `axes::edge_normals`, `project::project`, `Interval::overlap`

use nalgebra::{Unit, Vector2};

use super::{axes::edge_normals, project::project};
use crate::geom2::Polygon;

/// Penetration data for a colliding pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Axis of minimum penetration, in the orientation the edge normal had.
    /// Do not use for direction; see `mtv`.
    pub axis: Vector2<f64>,
    /// Penetration depth along `axis` (>= 0).
    pub overlap: f64,
    /// `axis` scaled by `overlap`, oriented from `p2` toward `p1`.
    pub mtv: Vector2<f64>,
}

/// Outcome of a collision query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollisionResult {
    Separated,
    Colliding(Contact),
}

impl CollisionResult {
    #[inline]
    pub fn collides(&self) -> bool {
        matches!(self, Self::Colliding(_))
    }

    #[inline]
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Colliding(c) => Some(c),
            Self::Separated => None,
        }
    }

    /// Minimum translation vector; zero when separated.
    #[inline]
    pub fn mtv(&self) -> Vector2<f64> {
        self.contact().map_or_else(Vector2::zeros, |c| c.mtv)
    }
}

/// Candidate axes of both polygons, normalized, in query order.
fn candidate_axes<'a>(
    p1: &'a Polygon,
    p2: &'a Polygon,
) -> impl Iterator<Item = Unit<Vector2<f64>>> + 'a {
    edge_normals(p1)
        .into_iter()
        .chain(edge_normals(p2))
        .map(Unit::new_normalize)
}

#[inline]
fn axis_overlap(p1: &Polygon, p2: &Polygon, axis: &Unit<Vector2<f64>>) -> f64 {
    project(p1, axis).overlap(&project(p2, axis))
}

/// Full query: separation test, minimum-penetration axis, and oriented MTV.
pub fn collision(p1: &Polygon, p2: &Polygon) -> CollisionResult {
    let mut best: Option<(Unit<Vector2<f64>>, f64)> = None;
    for (k, axis) in candidate_axes(p1, p2).enumerate() {
        let overlap = axis_overlap(p1, p2, &axis);
        if overlap > 0.0 {
            tracing::trace!(axis = k, gap = overlap, "separating axis");
            return CollisionResult::Separated;
        }
        let depth = overlap.abs();
        if best.as_ref().map_or(true, |(_, d)| depth < *d) {
            best = Some((axis, depth));
        }
    }
    // Validated polygons always contribute axes.
    let Some((axis, overlap)) = best else {
        return CollisionResult::Separated;
    };

    let mut mtv = axis.into_inner().normalize() * overlap;
    let d = p1.center() - p2.center();
    if d.dot(&mtv) < 0.0 {
        mtv = -mtv;
    }
    tracing::debug!(overlap, mtv_x = mtv.x, mtv_y = mtv.y, "collision");
    CollisionResult::Colliding(Contact {
        axis: axis.into_inner(),
        overlap,
        mtv,
    })
}

/// Separation test only; agrees with `collision(p1, p2).collides()`.
pub fn intersects(p1: &Polygon, p2: &Polygon) -> bool {
    candidate_axes(p1, p2).all(|axis| axis_overlap(p1, p2, &axis) <= 0.0)
}
