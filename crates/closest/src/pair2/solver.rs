//! Divide-and-conquer closest-pair solver.
//!
//! The entry point sorts a private copy of the input once by x and recurses
//! over index-range sub-slices of that one buffer. Every sub-slice is
//! contiguous in its parent's x-order and itself sorted by x, which the
//! strip filter needs for its early-exit scan.

use super::brute::brute_force_min_distance;
use super::strip::strip_min_distance;
use super::types::{Point, SolveCfg};
use super::util::sort_by_x;

/// Minimum pairwise Euclidean distance over `points`, in O(n log n).
///
/// Returns `f64::INFINITY` when fewer than two points are supplied; callers
/// must check that sentinel before using the result as a real distance.
/// The input slice is never mutated; sorting happens on a private copy.
pub fn closest_pair_distance(points: &[Point]) -> f64 {
    closest_pair_distance_with(points, SolveCfg::default())
}

/// As [`closest_pair_distance`], with an explicit configuration.
pub fn closest_pair_distance_with(points: &[Point], cfg: SolveCfg) -> f64 {
    // Cutoffs below 3 would split 2-element partitions into pairless halves.
    let cutoff = cfg.brute_cutoff.max(3);
    let mut sorted = points.to_vec();
    sort_by_x(&mut sorted);
    solve_sorted(&sorted, cutoff)
}

/// Recursive worker over an x-sorted slice.
fn solve_sorted(sorted: &[Point], cutoff: usize) -> f64 {
    let n = sorted.len();
    if n <= cutoff {
        // The cutoff check happens before recursion, never inside it.
        return brute_force_min_distance(sorted);
    }

    // Partition at the median index, not a coordinate threshold: halves stay
    // balanced no matter how the x-coordinates are distributed.
    let mid = n / 2;
    let d_left = solve_sorted(&sorted[..mid], cutoff);
    let d_right = solve_sorted(&sorted[mid..], cutoff);
    let d = d_left.min(d_right);

    let divider_x = sorted[mid].x as f64;
    let d_strip = strip_min_distance(sorted, divider_x, d);
    d.min(d_strip)
}
