use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use closest::pair2::rand::{draw_points, ReplayToken, ScatterCfg, Shape};
use closest::pair2::{brute_force_min_distance, closest_pair_distance};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair runner and point-set generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a point set (count, then coordinate pairs) and print the
    /// minimum pairwise distance
    Solve {
        /// Read tokens from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Algo::Dc)]
        algo: Algo,
        /// Print a JSON summary instead of the bare scalar
        #[arg(long)]
        json: bool,
    },
    /// Emit a reproducible random point set in the solve input format
    Gen {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinates land in [0, bound]^2
        #[arg(long, default_value_t = 10_000)]
        bound: i64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Uniform)]
        shape: ShapeArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    /// Divide and conquer, O(n log n)
    Dc,
    /// Quadratic pairwise scan (reference oracle)
    Brute,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Uniform,
    Cluster,
    Collinear,
    Grid,
}

impl From<ShapeArg> for Shape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Uniform => Shape::Uniform,
            ShapeArg::Cluster => Shape::Clustered { clusters: 5 },
            ShapeArg::Collinear => Shape::Collinear,
            ShapeArg::Grid => Shape::Grid,
        }
    }
}

#[derive(Serialize)]
struct Summary {
    n: usize,
    /// None when fewer than two points were supplied (no pair exists).
    min_distance: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, algo, json } => solve(input, algo, json),
        Action::Gen {
            n,
            seed,
            bound,
            shape,
        } => gen(n, seed, bound, shape.into()),
    }
}

fn solve(input: Option<PathBuf>, algo: Algo, json: bool) -> Result<()> {
    let text = input::read_source(input.as_deref())?;
    let points = input::parse_points(&text)?;
    tracing::info!(n = points.len(), algo = ?algo, "solve");
    let min = match algo {
        Algo::Dc => closest_pair_distance(&points),
        Algo::Brute => brute_force_min_distance(&points),
    };
    if json {
        let summary = Summary {
            n: points.len(),
            min_distance: min.is_finite().then_some(min),
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{min}");
    }
    Ok(())
}

fn gen(n: usize, seed: u64, bound: i64, shape: Shape) -> Result<()> {
    tracing::info!(n, seed, bound, shape = ?shape, "gen");
    let cfg = ScatterCfg { n, bound, shape };
    let pts = draw_points(cfg, ReplayToken { seed, index: 0 });
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    writeln!(out, "{}", pts.len())?;
    for p in &pts {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    out.flush()?;
    Ok(())
}
