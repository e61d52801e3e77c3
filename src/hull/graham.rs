//! Graham's scan.

use super::{angular_sequence, dedup_points, left_turn_chain};
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the convex hull by Graham's scan, O(n log n).
///
/// The pivot is the point with the lowest y-coordinate (ties broken toward
/// the lowest x), the remaining points are sorted by polar angle about it,
/// and a stack scan pops every vertex that fails to make a strict left turn
/// with its successor. The result starts at the pivot and runs
/// counter-clockwise.
///
/// The distance tie-break in the angular sort is what keeps collinear points
/// on one ray from corrupting the scan: they arrive nearest first, so each is
/// popped as soon as the next one lands.
pub fn graham_scan_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let points = dedup_points(points);
    if points.len() < 3 {
        return points;
    }

    left_turn_chain(angular_sequence(points))
}
