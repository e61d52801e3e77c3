//! Brute-force hull by pairwise side-consistency.

use super::{dedup_points, graham_scan_hull};
use crate::predicates::{orient2d, Orientation};
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the convex hull by testing every point pair as a candidate edge,
/// O(n³). Reference correctness, not performance.
///
/// A pair qualifies when no two remaining points fall on strictly opposite
/// sides of its line. Qualifying pairs yield their endpoints as hull-edge
/// endpoints, but the raw collection is unordered and over-complete: both
/// endpoints are emitted independently, and a point interior to a collinear
/// edge can qualify through its sub-segments. The deduplicated candidates are
/// therefore assembled into a counter-clockwise cycle by Graham's scan, which
/// also discards those collinear interlopers.
pub fn brute_force_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let points = dedup_points(points);
    if points.len() < 3 {
        return points;
    }

    let mut candidates: Vec<Point2<F>> = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let mut saw_cw = false;
            let mut saw_ccw = false;
            for (k, &r) in points.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                match orient2d(points[i], points[j], r) {
                    Orientation::Clockwise => saw_cw = true,
                    Orientation::CounterClockwise => saw_ccw = true,
                    Orientation::Collinear => {}
                }
                if saw_cw && saw_ccw {
                    break;
                }
            }
            if !(saw_cw && saw_ccw) {
                for p in [points[i], points[j]] {
                    if !candidates.contains(&p) {
                        candidates.push(p);
                    }
                }
            }
        }
    }

    graham_scan_hull(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_square_with_interior_point() {
        let points = vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0), pt(2.0, 2.0)];
        let hull = brute_force_hull(&points);

        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&pt(2.0, 2.0)));
    }

    #[test]
    fn test_output_is_ordered_not_just_a_vertex_set() {
        use crate::predicates::{orient2d, Orientation};

        let points = vec![pt(0.0, 0.0), pt(6.0, 1.0), pt(5.0, 6.0), pt(1.0, 5.0), pt(3.0, 3.0)];
        let hull = brute_force_hull(&points);

        let n = hull.len();
        assert_eq!(n, 4);
        for i in 0..n {
            assert_eq!(
                orient2d(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]),
                Orientation::CounterClockwise
            );
        }
    }

    #[test]
    fn test_collinear_interior_points_filtered() {
        // (1,0) and (2,0) qualify through sub-segments of the bottom edge but
        // are not hull vertices.
        let points = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0), pt(1.0, 2.0)];
        let hull = brute_force_hull(&points);

        assert_eq!(hull.len(), 3);
        assert!(!hull.contains(&pt(1.0, 0.0)));
        assert!(!hull.contains(&pt(2.0, 0.0)));
    }

    #[test]
    fn test_fully_collinear_input() {
        let points = vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 3.0)];
        let hull = brute_force_hull(&points);
        assert_eq!(hull, vec![pt(0.0, 0.0), pt(3.0, 3.0)]);
    }
}
