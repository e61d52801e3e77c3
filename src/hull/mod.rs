//! Convex hull construction.
//!
//! Five algorithms are implemented side by side so the same point set can be
//! run through all of them and the results compared. They share one contract:
//! the hull boundary comes back as a simple polygon in counter-clockwise
//! order, every input point lies on or inside it, and the vertex sets agree
//! across algorithms. Inputs of fewer than three points are returned
//! unchanged, and a fully collinear input degenerates to its two
//! lexicographic extremes.
//!
//! # Example
//!
//! ```
//! use hull2d::{convex_hull, Algorithm, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(2.0, 2.0), // Interior point
//! ];
//!
//! for algorithm in Algorithm::ALL {
//!     let hull = convex_hull(&points, algorithm);
//!     assert_eq!(hull.len(), 4); // Interior point excluded by every algorithm
//! }
//! ```

mod brute_force;
mod graham;
mod jarvis;
mod kirkpatrick_seidel;
mod quick_elim;

pub use brute_force::brute_force_hull;
pub use graham::graham_scan_hull;
pub use jarvis::jarvis_march_hull;
pub use kirkpatrick_seidel::kirkpatrick_seidel_hull;
pub use quick_elim::quick_elimination_hull;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::HullError;
use crate::predicates::{orient2d, Orientation};
use crate::primitives::Point2;
use num_traits::Float;

/// Selects which construction algorithm [`convex_hull`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Pairwise side-consistency filtering, O(n³).
    BruteForce,
    /// Gift wrapping, O(nh) for h hull vertices.
    JarvisMarch,
    /// Angular sort plus a left-turn stack scan, O(n log n).
    GrahamScan,
    /// Forward and reverse elimination chains over the angular order.
    QuickElimination,
    /// Divide and conquer with tangent merging.
    KirkpatrickSeidel,
}

impl Algorithm {
    /// Every algorithm, in a fixed order, for run-them-all comparisons.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BruteForce,
        Algorithm::JarvisMarch,
        Algorithm::GrahamScan,
        Algorithm::QuickElimination,
        Algorithm::KirkpatrickSeidel,
    ];

    /// The kebab-case name this algorithm parses from and displays as.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::JarvisMarch => "jarvis-march",
            Algorithm::GrahamScan => "graham-scan",
            Algorithm::QuickElimination => "quick-elimination",
            Algorithm::KirkpatrickSeidel => "kirkpatrick-seidel",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| HullError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Computes the convex hull of `points` with the chosen algorithm.
///
/// All algorithms return the same vertex set for the same input; winding is
/// counter-clockwise everywhere, though the starting vertex differs between
/// algorithms. The input is never mutated and nothing is retained between
/// calls.
///
/// # Example
///
/// ```
/// use hull2d::{convex_hull, Algorithm, Point2};
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0), // Collinear input
/// ];
///
/// let hull = convex_hull(&points, Algorithm::JarvisMarch);
/// assert_eq!(hull, vec![Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)]);
/// ```
pub fn convex_hull<F: Float>(points: &[Point2<F>], algorithm: Algorithm) -> Vec<Point2<F>> {
    match algorithm {
        Algorithm::BruteForce => brute_force_hull(points),
        Algorithm::JarvisMarch => jarvis_march_hull(points),
        Algorithm::GrahamScan => graham_scan_hull(points),
        Algorithm::QuickElimination => quick_elimination_hull(points),
        Algorithm::KirkpatrickSeidel => kirkpatrick_seidel_hull(points),
    }
}

/// Tests if a point is inside or on the boundary of a counter-clockwise hull.
///
/// Degenerate hulls are handled: a two-vertex hull contains exactly the
/// points of its segment, a one-vertex hull only itself, an empty hull
/// nothing.
pub fn point_in_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    match hull {
        [] => false,
        [p] => *p == point,
        [a, b] => on_segment(*a, *b, point),
        _ => {
            // Inside a CCW polygon means on or left of every directed edge.
            let n = hull.len();
            (0..n).all(|i| orient2d(hull[i], hull[(i + 1) % n], point) != Orientation::Clockwise)
        }
    }
}

fn on_segment<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>) -> bool {
    orient2d(a, b, p) == Orientation::Collinear
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Exact-duplicate removal preserving first-seen order.
///
/// Coincident points would otherwise reach the angular sort as zero vectors
/// from the pivot and confuse successor selection in the gift wrap.
pub(crate) fn dedup_points<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut unique: Vec<Point2<F>> = Vec::with_capacity(points.len());
    for &p in points {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    unique
}

/// Lexicographic order: by x, then by y.
pub(crate) fn lexicographic<F: Float>(a: &Point2<F>, b: &Point2<F>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Orders points for an angular scan: the pivot (lowest y, ties toward lowest
/// x) comes first, the rest sorted by polar angle about it via `atan2`. Angle
/// ties break by ascending distance from the pivot, then lexicographically,
/// so collinear points on one ray are visited nearest first and the scan can
/// pop the interior ones.
pub(crate) fn angular_sequence<F: Float>(mut points: Vec<Point2<F>>) -> Vec<Point2<F>> {
    let mut pivot_idx = 0;
    for i in 1..points.len() {
        let (p, best) = (points[i], points[pivot_idx]);
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            pivot_idx = i;
        }
    }
    points.swap(0, pivot_idx);

    let pivot = points[0];
    points[1..].sort_by(|a, b| {
        let angle_a = (a.y - pivot.y).atan2(a.x - pivot.x);
        let angle_b = (b.y - pivot.y).atan2(b.x - pivot.x);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                pivot
                    .distance_squared(*a)
                    .partial_cmp(&pivot.distance_squared(*b))
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| lexicographic(a, b))
    });
    points
}

/// Stack scan retaining only strict left turns, shared by Graham's scan and
/// both passes of quick elimination. The first input point is never popped.
pub(crate) fn left_turn_chain<F, I>(points: I) -> Vec<Point2<F>>
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let mut chain: Vec<Point2<F>> = Vec::new();
    for p in points {
        while chain.len() > 1
            && orient2d(chain[chain.len() - 2], chain[chain.len() - 1], p)
                != Orientation::CounterClockwise
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
