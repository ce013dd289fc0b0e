//! Random and regular convex polygons for tests, benchmarks, and demos.
//!
//! Model
//! - Radial sampler: `n` equally spaced angles on [0, 2π) with bounded angular
//!   and radial jitter, closed by a convex hull so the result is always convex.
//! - Regular sampler: exact regular `n`-gon; centrally symmetric for even `n`,
//!   so the vertex mean is also the midpoint of every projection interval.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `hull::polygon_from_points`, `polygon::Polygon`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::polygon_from_points;
use super::polygon::{Polygon, PolygonError};
use super::types::GeomCfg;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random convex polygon around `center`.
///
/// Fails only when the hull collapses (fewer than 3 distinct points), which
/// the clamped jitter makes practically unreachable for `n >= 3`.
pub fn draw_polygon_radial(
    cfg: RadialCfg,
    tok: ReplayToken,
    center: Vector2<f64>,
) -> Result<Polygon, PolygonError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect();
    polygon_from_points(&pts, &GeomCfg::default())
}

/// Regular `sides`-gon with circumradius `radius`, first vertex at angle `rotation`.
pub fn regular_polygon(
    sides: usize,
    radius: f64,
    rotation: f64,
    center: Vector2<f64>,
) -> Result<Polygon, PolygonError> {
    let delta = std::f64::consts::TAU / sides.max(1) as f64;
    let verts = (0..sides)
        .map(|k| {
            let th = rotation + k as f64 * delta;
            center + Vector2::new(th.cos(), th.sin()) * radius
        })
        .collect();
    Polygon::new(verts, &GeomCfg::default())
}
