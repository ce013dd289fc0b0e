//! Separating Axis Theorem (SAT) collision engine for pairs of convex polygons.
//!
//! Pipeline per query
//! - `edge_normals`: one candidate axis per edge of each polygon.
//! - `project`: vertex dot products on a unit axis → `Interval`.
//! - `Interval::overlap`: signed gap (> 0) or penetration (<= 0).
//! - `collision`: early exit on the first separating axis, else the axis of
//!   minimum penetration and an MTV oriented by the polygons' vertex means.
//!
//! Queries are pure functions of the two polygons' current vertices; nothing
//! is cached between calls, so disjoint polygons can be queried from any
//! number of threads.
//!
//! Code cross-refs: `crate::geom2::{Polygon, Interval}`

mod axes;
mod project;
mod resolve;

pub use axes::edge_normals;
pub use project::project;
pub use resolve::{collision, intersects, CollisionResult, Contact};
