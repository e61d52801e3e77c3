//! Jarvis march (gift wrapping).

use super::{dedup_points, lexicographic};
use crate::predicates::{orient2d, Orientation};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull by gift wrapping, O(nh) for h hull vertices.
///
/// Starting from the lexicographic minimum (guaranteed on the hull), each
/// step selects the successor no other point is strictly clockwise of; the
/// walk then advances along the boundary until it returns to the start.
/// Collinear candidate ties resolve toward the farther point, which makes the
/// walk jump over points interior to a collinear edge instead of visiting
/// them.
pub fn jarvis_march_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let points = dedup_points(points);
    if points.len() < 3 {
        return points;
    }

    let mut start = points[0];
    for &p in &points[1..] {
        if lexicographic(&p, &start) == Ordering::Less {
            start = p;
        }
    }

    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);

        // Seed the candidate with any point other than the current one; the
        // walk must never select its own position as successor.
        let mut next = if points[0] == current {
            points[1]
        } else {
            points[0]
        };
        for &r in &points {
            if r == current {
                continue;
            }
            match orient2d(current, next, r) {
                Orientation::Clockwise => next = r,
                Orientation::Collinear
                    if current.distance_squared(r) > current.distance_squared(next) =>
                {
                    next = r;
                }
                _ => {}
            }
        }

        if next == start {
            break;
        }
        current = next;
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_starts_at_lexicographic_minimum() {
        let points = vec![pt(4.0, 1.0), pt(0.0, 3.0), pt(0.0, 1.0), pt(2.0, 5.0)];
        let hull = jarvis_march_hull(&points);
        assert_eq!(hull[0], pt(0.0, 1.0));
    }

    #[test]
    fn test_triangle_with_interior_point() {
        let points = vec![pt(0.0, 0.0), pt(6.0, 0.0), pt(3.0, 6.0), pt(3.0, 2.0)];
        let hull = jarvis_march_hull(&points);
        assert_eq!(hull.len(), 3);
        assert!(!hull.contains(&pt(3.0, 2.0)));
    }

    #[test]
    fn test_walk_is_counter_clockwise() {
        let points = vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)];
        let hull = jarvis_march_hull(&points);
        assert_eq!(hull, vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)]);
    }

    #[test]
    fn test_collinear_edge_points_skipped() {
        let points = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0), pt(1.0, 3.0)];
        let hull = jarvis_march_hull(&points);
        assert_eq!(hull.len(), 3);
        assert!(hull.contains(&pt(0.0, 0.0)));
        assert!(hull.contains(&pt(3.0, 0.0)));
        assert!(hull.contains(&pt(1.0, 3.0)));
    }

    #[test]
    fn test_fully_collinear_input() {
        let points = vec![pt(2.0, 2.0), pt(0.0, 0.0), pt(1.0, 1.0), pt(3.0, 3.0)];
        let hull = jarvis_march_hull(&points);
        assert_eq!(hull, vec![pt(0.0, 0.0), pt(3.0, 3.0)]);
    }
}
