//! Convex polygons in vertex representation.
//!
//! Purpose
//! - Provide a validated, closed, convex vertex loop (`Polygon`) that the SAT
//!   engine can consume without re-checking preconditions.
//!
//! Invariants (checked by `Polygon::new`)
//! - At least 3 vertices, all coordinates finite.
//! - No edge shorter than `GeomCfg::eps_edge` (closing edge included).
//! - Convex and simple: every turn has the same sign (turns with
//!   `|sin| <= eps_convex` count as collinear),
//!   and the loop turns exactly once. Either winding is accepted.
//!
//! Translation keeps all invariants, so `translate`/`translated` never
//! revalidate. No operation here resizes the vertex list.
//!
//! Code cross-refs: `types::GeomCfg`, `crate::sat::{collision, edge_normals}`

use std::fmt;

use nalgebra::Vector2;

use super::types::GeomCfg;

/// Precondition violations rejected by `Polygon::new`.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    TooFewVertices { count: usize },
    NonFinite { index: usize },
    DegenerateEdge { index: usize, length: f64 },
    NonConvex { index: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            Self::NonFinite { index } => write!(f, "vertex {index} has a non-finite coordinate"),
            Self::DegenerateEdge { index, length } => {
                write!(f, "edge {index} is degenerate (length {length:e})")
            }
            Self::NonConvex { index } => {
                write!(f, "polygon is not convex and simple (at vertex {index})")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Closed convex loop: vertex `i` connects to `i+1`, the last to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Validate and wrap a vertex loop.
    pub fn new(verts: Vec<Vector2<f64>>, cfg: &GeomCfg) -> Result<Self, PolygonError> {
        let n = verts.len();
        if n < 3 {
            return Err(PolygonError::TooFewVertices { count: n });
        }
        if let Some(index) = verts.iter().position(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(PolygonError::NonFinite { index });
        }
        for i in 0..n {
            let length = (verts[(i + 1) % n] - verts[i]).norm();
            if length < cfg.eps_edge {
                return Err(PolygonError::DegenerateEdge { index: i, length });
            }
        }

        let mut positive = false;
        let mut negative = false;
        let mut winding = 0.0;
        for i in 0..n {
            let e0 = verts[(i + 1) % n] - verts[i];
            let e1 = verts[(i + 2) % n] - verts[(i + 1) % n];
            let turn = e0.perp(&e1);
            // Sine of the turn angle, so the threshold holds at any scale.
            let tol = cfg.eps_convex * e0.norm() * e1.norm();
            if turn > tol {
                positive = true;
            } else if turn < -tol {
                negative = true;
            }
            if positive && negative {
                return Err(PolygonError::NonConvex { index: (i + 1) % n });
            }
            winding += turn.atan2(e0.dot(&e1));
        }
        // All-collinear loops enclose nothing; a pentagram turns one way at
        // every corner but winds twice.
        if !(positive || negative) || (winding.abs() - std::f64::consts::TAU).abs() > 1e-6 {
            return Err(PolygonError::NonConvex { index: 0 });
        }
        Ok(Self { verts })
    }

    /// Convenience constructor from `(x, y)` pairs with default tolerances.
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self, PolygonError> {
        let verts = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        Self::new(verts, &GeomCfg::default())
    }

    /// Axis-aligned rectangle with corners `min` and `max`, counterclockwise.
    pub fn rect(min: Vector2<f64>, max: Vector2<f64>) -> Result<Self, PolygonError> {
        Self::new(
            vec![
                min,
                Vector2::new(max.x, min.y),
                max,
                Vector2::new(min.x, max.y),
            ],
            &GeomCfg::default(),
        )
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false for a validated polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edge vectors `v[i] - v[i+1]` (wrapping), one per vertex.
    pub fn edges(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| self.verts[i] - self.verts[(i + 1) % n])
    }

    /// Arithmetic mean of the vertices (not the area centroid).
    pub fn center(&self) -> Vector2<f64> {
        let sum = self
            .verts
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v);
        sum / self.verts.len() as f64
    }

    /// Move every vertex by `by`, in place.
    pub fn translate(&mut self, by: Vector2<f64>) {
        for v in &mut self.verts {
            *v += by;
        }
    }

    /// Copy of the polygon moved by `by`.
    pub fn translated(&self, by: Vector2<f64>) -> Polygon {
        let mut out = self.clone();
        out.translate(by);
        out
    }

    /// Signed area (shoelace). Positive for counterclockwise loops.
    pub fn signed_area(&self) -> f64 {
        let n = self.verts.len();
        0.5 * (0..n)
            .map(|i| self.verts[i].perp(&self.verts[(i + 1) % n]))
            .sum::<f64>()
    }
}

impl From<Polygon> for Vec<Vector2<f64>> {
    fn from(p: Polygon) -> Self {
        p.verts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn accepts_both_windings() {
        let ccw = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let cw = Polygon::from_xy(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
        assert!((ccw.signed_area() - 1.0).abs() < 1e-12);
        assert!((cw.signed_area() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn accepts_collinear_run() {
        let p = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(p.is_ok());
    }

    #[test]
    fn rejects_precondition_violations() {
        assert_eq!(
            Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)]),
            Err(PolygonError::TooFewVertices { count: 2 })
        );
        assert_eq!(
            Polygon::from_xy(&[(0.0, 0.0), (f64::NAN, 0.0), (0.0, 1.0)]),
            Err(PolygonError::NonFinite { index: 1 })
        );
        // Duplicated closing vertex gives a zero-length last edge.
        assert!(matches!(
            Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]),
            Err(PolygonError::DegenerateEdge { index: 3, .. })
        ));
        // Dart (reflex vertex at (1,1)).
        assert!(matches!(
            Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)]),
            Err(PolygonError::NonConvex { .. })
        ));
    }

    #[test]
    fn convexity_check_is_scale_free() {
        let tiny = Polygon::from_xy(&[(0.0, 0.0), (1e-5, 0.0), (0.0, 1e-5)]).unwrap();
        assert!(tiny.signed_area() > 0.0);
        let huge = Polygon::from_xy(&[(0.0, 0.0), (1e6, 0.0), (1e6, 1e6), (0.0, 1e6)]).unwrap();
        assert!((huge.signed_area() - 1e12).abs() < 1.0);
        // 64-gon of radius 1e-3: every turn is ~1e-8 in raw cross-product terms.
        let verts: Vec<(f64, f64)> = (0..64)
            .map(|k| {
                let th = k as f64 * std::f64::consts::TAU / 64.0;
                (1e-3 * th.cos(), 1e-3 * th.sin())
            })
            .collect();
        assert!(Polygon::from_xy(&verts).is_ok());
        // Tiny darts are still rejected.
        assert!(matches!(
            Polygon::from_xy(&[(0.0, 0.0), (2e-6, 0.0), (1e-6, 1e-6), (2e-6, 2e-6), (0.0, 2e-6)]),
            Err(PolygonError::NonConvex { .. })
        ));
    }

    #[test]
    fn rejects_flat_loop() {
        assert!(matches!(
            Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]),
            Err(PolygonError::NonConvex { .. })
        ));
    }

    #[test]
    fn rejects_pentagram() {
        let star: Vec<(f64, f64)> = (0..5)
            .map(|k| {
                let th = (k * 2) as f64 * std::f64::consts::TAU / 5.0;
                (th.cos(), th.sin())
            })
            .collect();
        assert!(matches!(
            Polygon::from_xy(&star),
            Err(PolygonError::NonConvex { .. })
        ));
    }

    #[test]
    fn center_and_translation() {
        let mut sq = Polygon::rect(vector![100.0, 100.0], vector![200.0, 200.0]).unwrap();
        assert_eq!(sq.center(), vector![150.0, 150.0]);
        let moved = sq.translated(vector![1.0, -1.0]);
        assert_eq!(moved.center(), vector![151.0, 149.0]);
        assert_eq!(sq.center(), vector![150.0, 150.0]);
        sq.translate(vector![0.0, -1.0]);
        assert_eq!(sq.vertices()[0], vector![100.0, 99.0]);
        assert_eq!(sq.len(), 4);
    }

    #[test]
    fn edges_follow_vertex_order() {
        let tri = Polygon::from_xy(&[(250.0, 250.0), (275.0, 320.0), (300.0, 250.0)]).unwrap();
        let edges: Vec<_> = tri.edges().collect();
        assert_eq!(edges[0], vector![-25.0, -70.0]);
        assert_eq!(edges[2], vector![50.0, 0.0]);
    }
}
