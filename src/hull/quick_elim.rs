//! Quick elimination: paired scans over the angular order.

use super::{angular_sequence, dedup_points, left_turn_chain};
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the convex hull from two elimination chains over the same angular
/// order Graham's scan uses.
///
/// A forward pass over the pivot-first sequence eliminates non-hull points
/// with the left-turn rule; a second pass over the reversed sequence builds
/// the closing chain back from the last point to the pivot. The two chains
/// share exactly their endpoints (the sequence's first and last points), so
/// the closing chain contributes only its interior, appended in order. The
/// concatenation preserves each chain's internal order; collapsing the
/// vertices through an unordered set would destroy the polygon ordering the
/// caller renders.
pub fn quick_elimination_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let points = dedup_points(points);
    if points.len() < 3 {
        return points;
    }

    let sequence = angular_sequence(points);
    let mut hull = left_turn_chain(sequence.iter().copied());
    let closing = left_turn_chain(sequence.iter().rev().copied());
    hull.extend_from_slice(&closing[1..closing.len() - 1]);
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_result_is_an_ordered_cycle() {
        use crate::predicates::{orient2d, Orientation};

        let points = vec![pt(0.0, 0.0), pt(5.0, 1.0), pt(4.0, 5.0), pt(1.0, 4.0), pt(2.5, 2.5)];
        let hull = quick_elimination_hull(&points);

        assert_eq!(hull.len(), 4);
        let n = hull.len();
        for i in 0..n {
            assert_eq!(
                orient2d(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]),
                Orientation::CounterClockwise
            );
        }
    }

    #[test]
    fn test_matches_graham_scan() {
        use super::super::graham_scan_hull;

        let points = vec![
            pt(2.0, 1.0),
            pt(7.0, 0.0),
            pt(9.0, 4.0),
            pt(5.0, 8.0),
            pt(0.0, 5.0),
            pt(4.0, 3.0),
            pt(6.0, 5.0),
        ];

        let quick = quick_elimination_hull(&points);
        let graham = graham_scan_hull(&points);
        assert_eq!(quick.len(), graham.len());
        for p in &graham {
            assert!(quick.contains(p));
        }
    }

    #[test]
    fn test_collinear_input() {
        let points = vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)];
        let hull = quick_elimination_hull(&points);
        assert_eq!(hull, vec![pt(0.0, 0.0), pt(2.0, 2.0)]);
    }

    #[test]
    fn test_no_duplicated_chain_endpoints() {
        let points = vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0), pt(2.0, 2.0)];
        let hull = quick_elimination_hull(&points);

        assert_eq!(hull.len(), 4);
        for (i, p) in hull.iter().enumerate() {
            assert!(!hull[i + 1..].contains(p), "vertex {p:?} appears twice");
        }
    }
}
