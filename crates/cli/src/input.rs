//! Polygon input: inline vertex lists and CSV query tables.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use sat2d::geom2::{GeomCfg, Polygon};
use sat2d::Vec2;

/// Parse `"x,y x,y x,y"` (whitespace or `;` separated) into a validated polygon.
pub fn parse_polygon(text: &str, cfg: &GeomCfg) -> Result<Polygon> {
    let mut verts = Vec::new();
    for tok in text
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
    {
        let (x, y) = tok
            .split_once(',')
            .with_context(|| format!("vertex `{tok}` is not of the form x,y"))?;
        let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{tok}`"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{tok}`"))?;
        verts.push(Vec2::new(x, y));
    }
    Polygon::new(verts, cfg).with_context(|| format!("invalid polygon `{text}`"))
}

/// A polygon pair keyed by its query id.
pub struct QueryPair {
    pub query: i64,
    pub p1: Polygon,
    pub p2: Polygon,
}

/// Read a CSV with columns `query, polygon, x, y` (rows in vertex order).
///
/// `polygon` selects the side of the pair (1 or 2). Queries come back sorted by id.
pub fn read_pairs_csv(path: &Path, cfg: &GeomCfg) -> Result<Vec<QueryPair>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let query = df.column("query")?.cast(&DataType::Int64)?;
    let side = df.column("polygon")?.cast(&DataType::Int64)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;

    let mut raw: BTreeMap<i64, (Vec<Vec2<f64>>, Vec<Vec2<f64>>)> = BTreeMap::new();
    let rows = query
        .i64()?
        .into_iter()
        .zip(side.i64()?)
        .zip(xs.f64()?)
        .zip(ys.f64()?);
    for (row, (((q, s), x), y)) in rows.enumerate() {
        let (Some(q), Some(s), Some(x), Some(y)) = (q, s, x, y) else {
            bail!("row {row}: missing value");
        };
        let entry = raw.entry(q).or_default();
        match s {
            1 => entry.0.push(Vec2::new(x, y)),
            2 => entry.1.push(Vec2::new(x, y)),
            other => bail!("row {row}: polygon must be 1 or 2, got {other}"),
        }
    }

    raw.into_iter()
        .map(|(query, (v1, v2))| {
            let p1 = Polygon::new(v1, cfg).with_context(|| format!("query {query}, polygon 1"))?;
            let p2 = Polygon::new(v2, cfg).with_context(|| format!("query {query}, polygon 2"))?;
            Ok(QueryPair { query, p1, p2 })
        })
        .collect()
}
