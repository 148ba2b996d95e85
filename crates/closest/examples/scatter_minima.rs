//! Solve a few reproducible scatters and print their minima for quick
//! visual sanity on shapes and sizes.
//!
//! Usage:
//!   cargo run -p closest --example scatter_minima -- uniform
//!   cargo run -p closest --example scatter_minima -- cluster

use closest::pair2::rand::{draw_points, ReplayToken, ScatterCfg, Shape};
use closest::pair2::{brute_force_min_distance, closest_pair_distance};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "uniform".to_string());
    let shape = match mode.as_str() {
        "uniform" => Shape::Uniform,
        "cluster" => Shape::Clustered { clusters: 5 },
        "collinear" => Shape::Collinear,
        "grid" => Shape::Grid,
        _ => {
            eprintln!("usage: scatter_minima [uniform|cluster|collinear|grid]");
            return;
        }
    };
    for i in 0..5 {
        let cfg = ScatterCfg {
            n: 400,
            bound: 10_000,
            shape,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 2025, index: i });
        let fast = closest_pair_distance(&pts);
        let slow = brute_force_min_distance(&pts);
        println!(
            "{mode} sample {i}: n={}, min={fast:.6}, oracle agrees: {}",
            pts.len(),
            (fast - slow).abs() < 1e-9
        );
    }
}
