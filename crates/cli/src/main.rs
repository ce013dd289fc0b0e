use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sat2d::geom2::GeomCfg;
use sat2d::sat::collision;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod input;
mod provenance;
mod report;

use demo::{Direction, Script};
use report::QueryReport;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex polygon collision queries (SAT + minimum translation vector)")]
struct Cmd {
    #[command(flatten)]
    tol: Tolerances,

    #[command(subcommand)]
    action: Action,
}

/// Overrides for polygon validation tolerances.
#[derive(Args)]
struct Tolerances {
    /// Minimum edge length; shorter edges are rejected
    #[arg(long, global = true)]
    eps_edge: Option<f64>,
    /// Turn-angle sine treated as collinear in the convexity check
    #[arg(long, global = true)]
    eps_convex: Option<f64>,
}

impl Tolerances {
    fn cfg(&self) -> GeomCfg {
        let mut cfg = GeomCfg::default();
        if let Some(eps) = self.eps_edge {
            cfg.eps_edge = eps;
        }
        if let Some(eps) = self.eps_convex {
            cfg.eps_convex = eps;
        }
        cfg
    }
}

/// How the square moves: one direction for N steps, or a multi-segment script.
#[derive(Args)]
struct DemoMoves {
    /// Direction of every step
    #[arg(long, value_enum, conflicts_with = "script")]
    direction: Option<Direction>,
    /// Number of steps in `--direction` [default: 100]
    #[arg(long, requires = "direction")]
    steps: Option<u32>,
    /// Moves of the square, e.g. "down:60,right:80" [default: down:60,right:80]
    #[arg(long)]
    script: Option<Script>,
}

impl DemoMoves {
    fn script(self) -> Script {
        match (self.direction, self.script) {
            (Some(dir), _) => Script(vec![(dir, self.steps.unwrap_or(100))]),
            (None, Some(script)) => script,
            (None, None) => Script::default(),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Query one pair given inline as "x,y x,y ..."
    Collide {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Query every pair of a CSV (query,polygon,x,y) and write a JSON array
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Replay the square/triangle scene headlessly
    Demo {
        #[command(flatten)]
        moves: DemoMoves,
        /// Optional per-frame JSON output
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = cmd.tol.cfg();
    match cmd.action {
        Action::Collide { a, b } => collide(&a, &b, &cfg),
        Action::Batch { input, out } => batch(&input, &out, &cfg),
        Action::Demo { moves, out } => run_demo(&moves.script(), out.as_deref()),
        Action::Report => report(),
    }
}

fn collide(a: &str, b: &str, cfg: &GeomCfg) -> Result<()> {
    let p1 = input::parse_polygon(a, cfg).context("polygon a")?;
    let p2 = input::parse_polygon(b, cfg).context("polygon b")?;
    let res = collision(&p1, &p2);
    tracing::info!(collides = res.collides(), "collide");
    println!("{}", serde_json::to_string_pretty(&QueryReport::new(None, &res))?);
    Ok(())
}

fn batch(input: &Path, out: &Path, cfg: &GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let pairs = input::read_pairs_csv(input, cfg)?;
    let reports: Vec<QueryReport> = pairs
        .iter()
        .map(|q| QueryReport::new(Some(q.query), &collision(&q.p1, &q.p2)))
        .collect();
    let hits = reports.iter().filter(|r| r.collides).count();
    tracing::info!(queries = reports.len(), collisions = hits, "batch_done");

    write_json(out, &serde_json::to_vec_pretty(&reports)?)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(
            "batch",
            serde_json::json!({
                "input": input.to_string_lossy(),
                "queries": reports.len(),
                "collisions": hits,
                "eps_edge": cfg.eps_edge,
                "eps_convex": cfg.eps_convex,
            }),
        ),
    )?;
    Ok(())
}

fn run_demo(script: &Script, out: Option<&Path>) -> Result<()> {
    tracing::info!(script = %script, "demo");
    let (square, triangle) = demo::initial_scene()?;
    let (frames, summary) = demo::run(script, square, triangle);
    tracing::info!(
        steps = summary.steps,
        contacts = summary.contacts,
        first_contact = ?summary.first_contact,
        "demo_done"
    );
    if let Some(out) = out {
        write_json(out, &serde_json::to_vec_pretty(&frames)?)?;
        provenance::write_sidecar(
            out,
            provenance::Payload::new("demo", serde_json::json!({ "script": script.to_string() })),
        )?;
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}

fn write_json(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn tolerance_flags_override_defaults() {
        let cmd = Cmd::try_parse_from(["cli", "report", "--eps-edge", "0.5"]).unwrap();
        let cfg = cmd.tol.cfg();
        assert_eq!(cfg.eps_edge, 0.5);
        assert_eq!(cfg.eps_convex, GeomCfg::default().eps_convex);
    }

    fn demo_script(args: &[&str]) -> Result<Script, clap::Error> {
        let cmd = Cmd::try_parse_from(["cli", "demo"].iter().chain(args))?;
        match cmd.action {
            Action::Demo { moves, out } => {
                assert!(out.is_none());
                Ok(moves.script())
            }
            _ => panic!("expected demo"),
        }
    }

    #[test]
    fn demo_direction_and_steps_flags() {
        let script = demo_script(&["--direction", "down", "--steps", "3"]).unwrap();
        assert_eq!(script, Script(vec![(Direction::Down, 3)]));
        let script = demo_script(&["--direction", "left"]).unwrap();
        assert_eq!(script.to_string(), "left:100");
        assert!(demo_script(&["--steps", "3"]).is_err());
        assert!(demo_script(&["--direction", "sideways"]).is_err());
        assert!(demo_script(&["--direction", "up", "--script", "down:1"]).is_err());
    }

    #[test]
    fn demo_script_flag_parses() {
        assert_eq!(demo_script(&["--script", "up:3"]).unwrap().to_string(), "up:3");
        assert_eq!(demo_script(&[]).unwrap().to_string(), "down:60,right:80");
        assert!(demo_script(&["--script", "up"]).is_err());
    }

    #[test]
    fn batch_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pairs.csv");
        fs::write(
            &input,
            "query,polygon,x,y\n\
             7,1,0,0\n7,1,1,0\n7,1,1,1\n7,1,0,1\n\
             7,2,0.5,0\n7,2,1.5,0\n7,2,1.5,1\n7,2,0.5,1\n",
        )
        .unwrap();
        let out = dir.path().join("nested/results.json");
        batch(&input, &out, &GeomCfg::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["query"], 7);
        assert_eq!(parsed[0]["collides"], true);
        assert!(dir.path().join("nested/results.provenance.json").exists());
    }
}
