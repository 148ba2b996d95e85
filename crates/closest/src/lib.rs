//! Closest pair of points in the Euclidean plane.
//!
//! The core is a divide-and-conquer solver that finds the minimum pairwise
//! distance of an integer point set in O(n log n): sort once by x, split at
//! the median index, recurse on both halves, and merge via a bounded-width
//! vertical strip scan. A quadratic pairwise scan serves as the recursion
//! base case and as the reference oracle in tests and benchmarks.

pub mod pair2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can stay on one import path.
pub use nalgebra::Vector2 as Vec2;
pub use pair2::{closest_pair_distance, Point, SolveCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::pair2::rand::{draw_points, ReplayToken, ScatterCfg, Shape};
    pub use crate::pair2::{
        brute_force_min_distance, closest_pair_distance, closest_pair_distance_with, distance,
        strip_min_distance, Point, SolveCfg,
    };
    pub use nalgebra::Vector2 as Vec2;
}
