//! Basic planar types and solver configuration.
//!
//! - `Point`: integer-coordinate point in the plane.
//! - `SolveCfg`: cutoff below which recursion hands off to the pairwise scan.

use nalgebra::Vector2;

/// A point in the Euclidean plane with integer coordinates.
///
/// Carries no identity beyond its coordinates; duplicates are valid input
/// (their pairwise distance is 0).
pub type Point = Vector2<i64>;

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Partitions of at most this many points go to the pairwise base case
    /// instead of splitting further.
    ///
    /// Never effective below 3: a 2-element partition must not be split into
    /// size-1 halves (no pairs exist there), and the strip scan assumes at
    /// least one point on each side of the divider with a finite candidate
    /// distance. The solver clamps smaller values up to 3.
    pub brute_cutoff: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self { brute_cutoff: 3 }
    }
}
