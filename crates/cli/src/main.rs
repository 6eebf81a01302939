mod io;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hullcheck::api::{
    cross_validate, generate_dataset, hull_contains, CrossCheck, Dataset, HullCfg, Point,
    ReplayToken,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls by monotone chain and divide and conquer, cross-checked")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a point set and write it as CSV
    Gen {
        #[arg(long)]
        dataset: Dataset,
        #[command(flatten)]
        draw: Draw,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run both algorithms, write both hulls and a provenance sidecar
    Run {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        tol: Tolerances,
        /// Monotone hull path; the dnc hull goes to `<stem>.dnc.csv` next to it
        #[arg(long)]
        out: PathBuf,
    },
    /// Run both algorithms and fail if their hulls differ
    Check {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        tol: Tolerances,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Replay token and size of a generated point set.
#[derive(Args, Clone, Copy, Debug)]
struct Draw {
    #[arg(long, default_value_t = 1000)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
}

/// Where the points come from: a CSV file or a dataset family.
#[derive(Args, Clone, Debug)]
struct Source {
    /// CSV file with columns x,y
    #[arg(long, conflicts_with = "dataset", required_unless_present = "dataset")]
    input: Option<PathBuf>,
    #[arg(long)]
    dataset: Option<Dataset>,
    #[command(flatten)]
    draw: Draw,
}

#[derive(Args, Clone, Copy, Debug, Default)]
struct Tolerances {
    /// Seed for the divide-and-conquer scan order
    #[arg(long)]
    shuffle_seed: Option<u64>,
    /// Per-coordinate tolerance when matching hull vertices
    #[arg(long)]
    match_eps: Option<f64>,
}

impl Tolerances {
    fn cfg(self) -> HullCfg {
        let mut cfg = HullCfg::default();
        if let Some(seed) = self.shuffle_seed {
            cfg.shuffle_seed = seed;
        }
        if let Some(eps) = self.match_eps {
            cfg.match_eps = eps;
        }
        cfg
    }
}

impl Source {
    fn load(&self) -> Result<(Vec<Point>, Value)> {
        match (&self.input, self.dataset) {
            (Some(path), _) => Ok((io::read_points(path)?, json!({ "input": path }))),
            (None, Some(dataset)) => {
                let pts = draw(dataset, self.draw)?;
                Ok((pts, draw_params(dataset, self.draw)))
            }
            (None, None) => bail!("either --input or --dataset is required"),
        }
    }
}

fn draw(dataset: Dataset, d: Draw) -> Result<Vec<Point>> {
    generate_dataset(dataset, d.n, ReplayToken::new(d.seed, d.index))
        .with_context(|| format!("generating {dataset}"))
}

fn draw_params(dataset: Dataset, d: Draw) -> Value {
    json!({ "dataset": dataset.name(), "n": d.n, "seed": d.seed, "index": d.index })
}

/// Outcome of one cross-check, as recorded in sidecars.
#[derive(Debug, Serialize)]
struct Summary {
    points: usize,
    monotone: usize,
    dnc: usize,
    matched: bool,
    missing_from_monotone: usize,
    missing_from_dnc: usize,
    /// Input points outside the monotone hull (beyond the containment slack).
    outside: usize,
}

impl Summary {
    fn new(pts: &[Point], cc: &CrossCheck, cfg: &HullCfg) -> Self {
        let outside = pts
            .iter()
            .filter(|&&p| !hull_contains(&cc.monotone, p, cfg.contain_eps))
            .count();
        Self {
            points: pts.len(),
            monotone: cc.monotone.len(),
            dnc: cc.dnc.len(),
            matched: cc.comparison.is_match(),
            missing_from_monotone: cc.comparison.missing_from_a.len(),
            missing_from_dnc: cc.comparison.missing_from_b.len(),
            outside,
        }
    }

    fn ok(&self) -> bool {
        self.matched && self.outside == 0
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen { dataset, draw, out } => gen(dataset, draw, &out),
        Action::Run { source, tol, out } => run(&source, tol.cfg(), &out).map(|_| ()),
        Action::Check { source, tol } => check(&source, tol.cfg()).map(|_| ()),
        Action::Report => report(),
    }
}

fn gen(dataset: Dataset, d: Draw, out: &Path) -> Result<()> {
    tracing::info!(%dataset, n = d.n, seed = d.seed, index = d.index, "gen");
    let pts = draw(dataset, d)?;
    io::write_points(out, &pts)?;
    provenance::write_sidecar(out, &[], Payload::new(draw_params(dataset, d))?)?;
    Ok(())
}

fn dnc_path(out: &Path) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    out.with_file_name(format!("{stem}.dnc.csv"))
}

fn run(source: &Source, cfg: HullCfg, out: &Path) -> Result<Summary> {
    let (pts, params) = source.load()?;
    tracing::info!(n = pts.len(), out = %out.display(), "run");
    let cc = cross_validate(&pts, &cfg)?;
    let summary = Summary::new(&pts, &cc, &cfg);
    if !summary.ok() {
        tracing::warn!(?summary, "hulls disagree");
    }

    let dnc_out = dnc_path(out);
    io::write_points(out, &cc.monotone)?;
    io::write_points(&dnc_out, &cc.dnc)?;
    let params = json!({
        "source": params,
        "shuffle_seed": cfg.shuffle_seed,
        "match_eps": cfg.match_eps,
    });
    let payload = Payload::new(params)?.with_summary(&summary)?;
    provenance::write_sidecar(out, &[&dnc_out], payload)?;
    Ok(summary)
}

fn check(source: &Source, cfg: HullCfg) -> Result<Summary> {
    let (pts, _) = source.load()?;
    let cc = cross_validate(&pts, &cfg)?;
    let summary = Summary::new(&pts, &cc, &cfg);
    if !summary.ok() {
        bail!(
            "hulls disagree: {} monotone vs {} dnc vertices, {} points outside",
            summary.monotone,
            summary.dnc,
            summary.outside
        );
    }
    tracing::info!(n = summary.points, vertices = summary.monotone, "hulls agree");
    Ok(summary)
}

fn report() -> Result<()> {
    let obj = provenance::document(json!({}), Value::Null, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
