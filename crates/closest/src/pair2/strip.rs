//! Strip merge: the combine step of the divide-and-conquer recursion.
//!
//! After both halves report a candidate minimum `best`, the only pairs that
//! can still beat it straddle the divider, inside the vertical band of
//! half-width `best`. Sorting that band by y bounds the number of relevant
//! neighbors per point to a small constant (packing argument: at most eight
//! points at mutual distance >= `best` fit in a `2*best` x `best` rectangle,
//! so seven trailing neighbors in y-order suffice).

use super::types::Point;
use super::util::{distance, sort_by_y};

/// Trailing y-neighbors examined per strip point. Seven is the classical
/// proven bound; fewer risks missing a valid closer pair.
const STRIP_WINDOW: usize = 7;

/// Minimum pairwise distance within the vertical strip of half-width `best`
/// around `divider_x`, or `best` if no strip pair is closer. The result
/// never exceeds `best`.
///
/// `sorted_by_x` must be sorted by ascending x; the filter scan relies on
/// that to stop at the strip's right edge instead of visiting the whole
/// slice. `best` must be a genuine candidate distance taken from the two
/// recursive halves (finite once each side holds a pair); the bounded
/// window is only exhaustive under that premise.
pub fn strip_min_distance(sorted_by_x: &[Point], divider_x: f64, best: f64) -> f64 {
    let lower = divider_x - best;
    let upper = divider_x + best;
    let mut strip: Vec<Point> = Vec::new();
    for &p in sorted_by_x {
        let x = p.x as f64;
        if x > upper {
            break;
        }
        if x > lower {
            strip.push(p);
        }
    }
    sort_by_y(&mut strip);

    let mut ans = best;
    for (i, &p) in strip.iter().enumerate() {
        for &q in strip.iter().skip(i + 1).take(STRIP_WINDOW) {
            // In y-order the gap only grows; once it alone reaches the
            // current minimum, no later neighbor can improve on it.
            if (q.y - p.y) as f64 >= ans {
                break;
            }
            let d = distance(p, q);
            if d < ans {
                ans = d;
            }
        }
    }
    ans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pair_straddling_the_divider() {
        // Halves report 4.0 (left pair) but (4,0)-(5,0) crosses the divider.
        let pts = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(5, 0),
            Point::new(9, 0),
        ];
        let d = strip_min_distance(&pts, 5.0, 4.0);
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn never_exceeds_current_best() {
        // Nothing in the strip is closer than the incoming candidate.
        let pts = [Point::new(-10, 0), Point::new(0, 0), Point::new(10, 0)];
        let d = strip_min_distance(&pts, 0.0, 3.0);
        assert_eq!(d, 3.0);
    }

    #[test]
    fn right_strip_edge_is_inclusive() {
        // x within (divider-best, divider+best]; a point exactly on the
        // right edge still pairs with its strip neighbors.
        let pts = [Point::new(1, 0), Point::new(2, 0)];
        let d = strip_min_distance(&pts, 0.0, 2.0);
        assert!((d - 1.0).abs() < 1e-12);
    }
}
