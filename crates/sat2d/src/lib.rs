//! Convex polygon collision detection with the Separating Axis Theorem.
//!
//! - `geom2`: validated convex polygons, projection intervals, tolerances,
//!   and polygon samplers.
//! - `sat`: the collision engine (edge normals, projection, interval overlap,
//!   resolver with minimum translation vector).
//!
//! API Policy
//! - Polygons are validated once at construction; engine calls are then
//!   infallible and allocation-light.
//! - Host concerns (rendering, input, how to apply the MTV) stay outside.

pub mod api;
pub mod geom2;
pub mod sat;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{GeomCfg, Interval, Polygon, PolygonError};
    pub use crate::sat::{collision, intersects, CollisionResult, Contact};
    pub use nalgebra::{vector, Vector2 as Vec2};
}
