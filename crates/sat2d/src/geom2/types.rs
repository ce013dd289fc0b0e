//! Basic 2D types and tolerances shared by polygons and the SAT engine.
//!
//! - `GeomCfg`: centralizes epsilons for polygon validation.
//! - `Interval`: closed 1D extent `[min, max]` of a projection, with the
//!   signed overlap used by separating-axis queries.
//!
//! Code cross-refs: `polygon::Polygon`, `crate::sat::project`

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Edges shorter than this are rejected as degenerate.
    pub eps_edge: f64,
    /// Turns whose angle has `|sin|` at or below this count as collinear.
    pub eps_convex: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_edge: 1e-12,
            eps_convex: 1e-9,
        }
    }
}

/// Projected extent of a polygon on an axis. `min <= max` by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "interval bounds out of order");
        Self { min, max }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Signed overlap with `other`.
    ///
    /// Takes the gap between the max of the interval that starts lower and
    /// the min of the other one:
    /// - `self.min < other.min` → `other.min - self.max`
    /// - otherwise → `self.min - other.max`
    ///
    /// A positive value is a gap (the axis separates). Zero or negative means
    /// the intervals overlap and `abs` of the value is the penetration depth.
    #[inline]
    pub fn overlap(&self, other: &Interval) -> f64 {
        if self.min < other.min {
            other.min - self.max
        } else {
            self.min - other.max
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_disjoint_is_positive_gap() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(2.0, 3.0);
        assert_eq!(a.overlap(&b), 1.0);
        assert_eq!(b.overlap(&a), 1.0);
    }

    #[test]
    fn overlap_partial_is_negative_depth() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(0.5, 1.5);
        assert_eq!(a.overlap(&b), -0.5);
        assert_eq!(b.overlap(&a), -0.5);
    }

    #[test]
    fn overlap_touching_is_zero() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(1.0, 2.0);
        assert_eq!(a.overlap(&b), 0.0);
    }

    #[test]
    fn overlap_containment_uses_lower_interval_max() {
        // [0,10] starts lower: 2 - 10 = -8, not the shorter exit of 3.
        let a = Interval::new(0.0, 10.0);
        let b = Interval::new(2.0, 3.0);
        assert_eq!(a.overlap(&b), -8.0);
        // Equal mins fall into the else branch on both orders.
        let c = Interval::new(0.0, 4.0);
        let d = Interval::new(0.0, 1.0);
        assert_eq!(c.overlap(&d), -1.0);
        assert_eq!(d.overlap(&c), -4.0);
    }
}
