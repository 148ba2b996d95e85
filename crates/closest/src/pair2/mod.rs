//! Closest pair in the plane (divide and conquer).
//!
//! Purpose
//! - Find the minimum pairwise Euclidean distance of a planar integer point
//!   set in O(n log n), with a quadratic pairwise scan as base case and
//!   reference oracle.
//! - Keep the API minimal (KISS, YAGNI) and the recursion allocation-light:
//!   one owned, x-sorted buffer, recursed over as index-range sub-slices.
//!
//! Why index-midpoint partitioning
//! - Splitting at the median index keeps the two halves balanced regardless
//!   of the coordinate distribution, so recursion depth stays O(log n) even
//!   on heavily skewed or duplicated x-coordinates.
//!
//! Code cross-refs: `types::{Point, SolveCfg}`, `brute`, `strip`, `solver`,
//! `rand` (deterministic samplers for tests/benches/experiments).

mod brute;
pub mod rand;
mod solver;
mod strip;
mod types;
mod util;

pub use brute::brute_force_min_distance;
pub use solver::{closest_pair_distance, closest_pair_distance_with};
pub use strip::strip_min_distance;
pub use types::{Point, SolveCfg};
pub use util::{distance, sort_by_x, sort_by_y};
