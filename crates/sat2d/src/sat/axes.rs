use nalgebra::Vector2;

use crate::geom2::Polygon;

/// One candidate separating axis per edge, in vertex order.
///
/// For edge `i` the edge vector is `v[i] - v[i+1]` (wrapping) and the axis is
/// its left perpendicular `(-e.y, e.x)`. Axes are not normalized; the length
/// equals the edge length.
pub fn edge_normals(poly: &Polygon) -> Vec<Vector2<f64>> {
    poly.edges().map(|e| Vector2::new(-e.y, e.x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn one_perpendicular_per_edge() {
        let tri = Polygon::from_xy(&[(250.0, 250.0), (275.0, 320.0), (300.0, 250.0)]).unwrap();
        let axes = edge_normals(&tri);
        assert_eq!(axes.len(), 3);
        assert_eq!(axes[0], vector![70.0, -25.0]);
        for (axis, edge) in axes.iter().zip(tri.edges()) {
            assert_eq!(axis.dot(&edge), 0.0);
            assert_eq!(axis.norm(), edge.norm());
        }
    }

    #[test]
    fn winding_flips_normals() {
        let ccw = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let cw = Polygon::from_xy(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
        // CCW loops get outward normals, CW loops inward ones.
        assert_eq!(edge_normals(&ccw)[0], vector![0.0, -1.0]);
        assert_eq!(edge_normals(&cw)[0], vector![1.0, 0.0]);
    }
}
