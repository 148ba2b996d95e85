//! Deterministic random point sets for tests, benches, and experiments.
//!
//! Model
//! - Each draw is keyed by a replay token `(seed, index)` mixed into a
//!   single RNG, so individual samples are reproducible and indexable.
//! - The shape families cover the adversarial inputs the solver must
//!   survive: uniform boxes, tight clusters, collinear runs, and regular
//!   grids (the last two exercise heavy x-ties and degenerate strips).
//!
//! Code cross-refs: `types::Point`

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point-set shape families.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    /// i.i.d. uniform over the integer box `[0, bound]²`.
    Uniform,
    /// Tight clusters (side `bound/100`) around uniform centers.
    Clustered { clusters: usize },
    /// Consecutive integer x on the x-axis; exact minimum distance 1.
    Collinear,
    /// Unit-spacing grid, roughly square.
    Grid,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub n: usize,
    /// Coordinates land in `[0, bound]²` (shape permitting). Clamped to >= 1.
    pub bound: i64,
    pub shape: Shape,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            n: 100,
            bound: 10_000,
            shape: Shape::Uniform,
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
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point set per `cfg`, reproducible under `tok`.
///
/// Duplicates are possible (and welcome) in the random shapes; the solver
/// must report 0 for them.
pub fn draw_points(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let bound = cfg.bound.max(1);
    match cfg.shape {
        Shape::Uniform => (0..cfg.n)
            .map(|_| Point::new(rng.gen_range(0..=bound), rng.gen_range(0..=bound)))
            .collect(),
        Shape::Clustered { clusters } => {
            let k = clusters.max(1);
            let spread = (bound / 100).max(1);
            let centers: Vec<Point> = (0..k)
                .map(|_| Point::new(rng.gen_range(0..=bound), rng.gen_range(0..=bound)))
                .collect();
            (0..cfg.n)
                .map(|i| {
                    let c = centers[i % k];
                    Point::new(
                        c.x + rng.gen_range(-spread..=spread),
                        c.y + rng.gen_range(-spread..=spread),
                    )
                })
                .collect()
        }
        Shape::Collinear => (0..cfg.n as i64).map(|i| Point::new(i, 0)).collect(),
        Shape::Grid => {
            let side = (cfg.n as f64).sqrt().ceil().max(1.0) as i64;
            (0..cfg.n as i64)
                .map(|i| Point::new(i % side, i / side))
                .collect()
        }
    }
}
