//! Headless replay of the interactive square/triangle scene.
//!
//! Each step moves the square one unit (screen space, y grows downward), runs
//! the resolver on (square, triangle), and on contact pushes the square by
//! half the MTV and the triangle by the other half.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use sat2d::geom2::Polygon;
use sat2d::sat::{collision, CollisionResult};
use sat2d::Vec2;
use serde::Serialize;

use crate::report::xy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn step(self) -> Vec2<f64> {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Sequence of `(direction, steps)` segments, written `down:60,right:80`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script(pub Vec<(Direction, u32)>);

impl FromStr for Script {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut segs = Vec::new();
        for seg in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (dir, n) = seg
                .split_once(':')
                .with_context(|| format!("segment `{seg}` is not of the form dir:steps"))?;
            let dir = Direction::from_str(dir.trim(), true)
                .map_err(|e| anyhow::anyhow!("segment `{seg}`: {e}"))?;
            let n: u32 = n.trim().parse().with_context(|| format!("bad step count in `{seg}`"))?;
            segs.push((dir, n));
        }
        if segs.is_empty() {
            bail!("empty script");
        }
        Ok(Self(segs))
    }
}

impl Default for Script {
    /// Down into the triangle's row, then right until the shapes meet.
    fn default() -> Self {
        Self(vec![(Direction::Down, 60), (Direction::Right, 80)])
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (dir, n)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            let name = dir.to_possible_value().map(|v| v.get_name().to_owned());
            write!(f, "{}:{n}", name.unwrap_or_default())?;
        }
        Ok(())
    }
}

/// State after one step (post-resolution positions).
#[derive(Clone, Debug, Serialize)]
pub struct Frame {
    pub step: u32,
    pub collides: bool,
    pub overlap: f64,
    pub mtv: [f64; 2],
    pub square_center: [f64; 2],
    pub triangle_center: [f64; 2],
}

#[derive(Clone, Debug, Serialize)]
pub struct DemoSummary {
    pub steps: u32,
    pub contacts: u32,
    pub first_contact: Option<u32>,
    pub square: Vec<[f64; 2]>,
    pub triangle: Vec<[f64; 2]>,
}

/// The scene's starting shapes: 100×100 square and a triangle below-right of it.
pub fn initial_scene() -> Result<(Polygon, Polygon)> {
    let square = Polygon::from_xy(&[(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0)])?;
    let triangle = Polygon::from_xy(&[(250.0, 250.0), (275.0, 320.0), (300.0, 250.0)])?;
    Ok((square, triangle))
}

/// Run `script` on the given shapes, returning every frame and a summary.
pub fn run(
    script: &Script,
    mut square: Polygon,
    mut triangle: Polygon,
) -> (Vec<Frame>, DemoSummary) {
    let mut frames = Vec::new();
    let mut step = 0u32;
    let mut contacts = 0u32;
    let mut first_contact = None;
    for &(dir, n) in &script.0 {
        for _ in 0..n {
            step += 1;
            square.translate(dir.step());
            let res = collision(&square, &triangle);
            let (overlap, mtv) = match res {
                CollisionResult::Colliding(c) => {
                    square.translate(c.mtv * 0.5);
                    triangle.translate(-c.mtv * 0.5);
                    contacts += 1;
                    if first_contact.is_none() {
                        first_contact = Some(step);
                    }
                    (c.overlap, c.mtv)
                }
                CollisionResult::Separated => (0.0, Vec2::zeros()),
            };
            let color = if res.collides() { "red" } else { "black" };
            tracing::debug!(step, ?dir, color, overlap, "frame");
            frames.push(Frame {
                step,
                collides: res.collides(),
                overlap,
                mtv: xy(mtv),
                square_center: xy(square.center()),
                triangle_center: xy(triangle.center()),
            });
        }
    }
    let summary = DemoSummary {
        steps: step,
        contacts,
        first_contact,
        square: square.vertices().iter().copied().map(xy).collect(),
        triangle: triangle.vertices().iter().copied().map(xy).collect(),
    };
    (frames, summary)
}
