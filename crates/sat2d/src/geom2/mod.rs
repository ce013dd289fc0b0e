//! 2D geometry for convex collision queries (vertex representation).
//!
//! Purpose
//! - Provide a single validated convex `Polygon` type that the SAT engine
//!   consumes, plus the small helpers around it (hull, samplers, tolerances).
//! - Keep the API minimal and numerically explicit (eps-aware validation).
//!
//! Code cross-refs: `Polygon`, `Interval`, `GeomCfg`, `crate::sat`

mod hull;
pub mod polygon;
pub mod rand;
mod types;

pub use hull::{convex_hull, polygon_from_points};
pub use polygon::{Polygon, PolygonError};
pub use types::{GeomCfg, Interval};
