//! Pairwise segment intersection detection.

use crate::predicates::{orient2d, Orientation};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// True when the two orientations are strict opposites (one clockwise, one
/// counter-clockwise). Any collinear outcome fails the test.
#[inline]
fn straddles(o1: Orientation, o2: Orientation) -> bool {
    o1 != Orientation::Collinear && o2 == o1.reversed()
}

/// Tests whether two segments properly cross, returning the crossing point.
///
/// A proper crossing requires each segment's endpoints to lie strictly on
/// opposite sides of the other segment's line. Touching at an endpoint,
/// collinear overlap, parallel segments, and zero-length segments all return
/// `None`: the orientation pre-filter maps every one of those to a
/// `Collinear` outcome before any division can happen.
///
/// For pairs that pass the filter, the point is found parametrically: solve
/// `start1 + t * dir1 = start2 + u * dir2` by Cramer's rule. The filter makes
/// `0 <= t <= 1` and `0 <= u <= 1` hold whenever the denominator is non-zero,
/// but both guards stay in place against floating-point edge cases.
pub fn crossing_point<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> Option<Point2<F>> {
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);

    if !straddles(orient2d(a, c, d), orient2d(b, c, d))
        || !straddles(orient2d(a, b, c), orient2d(a, b, d))
    {
        return None;
    }

    let d1 = s1.direction();
    let d2 = s2.direction();
    let denom = d1.cross(d2);
    if denom == F::zero() {
        // Parallel lines; unreachable past the filter but never divide by it.
        return None;
    }

    let offset = c - a;
    let t = offset.cross(d2) / denom;
    let u = offset.cross(d1) / denom;
    if t < F::zero() || t > F::one() || u < F::zero() || u > F::one() {
        return None;
    }

    Some(s1.point_at(t))
}

/// Computes all pairwise proper crossings among `segments`.
///
/// Every unordered pair is tested once, so the result holds one point per
/// properly crossing pair, in pair-iteration order but with no meaningful
/// ordering beyond that. O(n²) pairs, O(1) per pair; never fails, and an
/// input with fewer than two segments yields an empty result.
///
/// # Example
///
/// ```
/// use hull2d::{intersections, Segment2};
///
/// let segments: Vec<Segment2<f64>> = vec![
///     Segment2::from_coords(0.0, 0.0, 4.0, 4.0),
///     Segment2::from_coords(0.0, 4.0, 4.0, 0.0),
/// ];
///
/// let points = intersections(&segments);
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].x, 2.0);
/// assert_eq!(points[0].y, 2.0);
/// ```
pub fn intersections<F: Float>(segments: &[Segment2<F>]) -> Vec<Point2<F>> {
    let mut points = Vec::new();
    for (i, &s1) in segments.iter().enumerate() {
        for &s2 in &segments[i + 1..] {
            if let Some(p) = crossing_point(s1, s2) {
                points.push(p);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crossing_x_shape() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let s2 = Segment2::from_coords(0.0, 4.0, 4.0, 0.0);

        let p = crossing_point(s1, s2).expect("diagonals must cross");
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_crossing_is_symmetric() {
        let s1: Segment2<f64> = Segment2::from_coords(-1.0, 0.5, 3.0, 2.5);
        let s2 = Segment2::from_coords(0.0, 3.0, 2.0, 0.0);

        let p = crossing_point(s1, s2).unwrap();
        let q = crossing_point(s2, s1).unwrap();
        assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, q.y, epsilon = 1e-12);

        // Endpoint order within a segment does not matter either.
        let r = crossing_point(s1.reversed(), s2).unwrap();
        assert_relative_eq!(p.x, r.x, epsilon = 1e-12);
    }

    #[test]
    fn test_disjoint_segments() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let s2 = Segment2::from_coords(0.0, 1.0, 1.0, 1.0);
        assert_eq!(crossing_point(s1, s2), None);
    }

    #[test]
    fn test_collinear_disjoint_segments() {
        // Collinear, non-overlapping: no crossing and no division by zero.
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let s2 = Segment2::from_coords(2.0, 0.0, 3.0, 0.0);
        assert_eq!(crossing_point(s1, s2), None);
    }

    #[test]
    fn test_collinear_overlapping_segments() {
        // Overlap along a line is not a proper crossing.
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let s2 = Segment2::from_coords(1.0, 0.0, 3.0, 0.0);
        assert_eq!(crossing_point(s1, s2), None);
    }

    #[test]
    fn test_touching_endpoint_is_not_a_crossing() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        let s2 = Segment2::from_coords(2.0, 2.0, 4.0, 0.0);
        assert_eq!(crossing_point(s1, s2), None);

        // T-junction: an endpoint resting on the other segment's interior.
        let s3 = Segment2::from_coords(1.0, 1.0, 3.0, 1.0);
        let s4 = Segment2::from_coords(2.0, 1.0, 2.0, 5.0);
        assert_eq!(crossing_point(s3, s4), None);
    }

    #[test]
    fn test_zero_length_segment() {
        let degen: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        let s = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        assert!(degen.is_degenerate());
        assert_eq!(crossing_point(degen, s), None);
        assert_eq!(crossing_point(s, degen), None);
    }

    #[test]
    fn test_intersections_counts_crossing_pairs() {
        // Two diagonals and one far-away segment: exactly one crossing.
        let segments: Vec<Segment2<f64>> = vec![
            Segment2::from_coords(0.0, 0.0, 4.0, 4.0),
            Segment2::from_coords(0.0, 4.0, 4.0, 0.0),
            Segment2::from_coords(10.0, 10.0, 11.0, 10.0),
        ];

        let points = intersections(&segments);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersections_order_insensitive() {
        let mut segments: Vec<Segment2<f64>> = vec![
            Segment2::from_coords(0.0, 0.0, 4.0, 4.0),
            Segment2::from_coords(0.0, 4.0, 4.0, 0.0),
            Segment2::from_coords(0.0, 2.0, 4.0, 2.0),
        ];

        let forward = intersections(&segments);
        segments.reverse();
        let backward = intersections(&segments);

        assert_eq!(forward.len(), backward.len());
        for p in &forward {
            assert!(backward.iter().any(|q| q == p));
        }
    }

    #[test]
    fn test_intersections_empty_input() {
        let none: Vec<Segment2<f64>> = Vec::new();
        assert!(intersections(&none).is_empty());

        let one = vec![Segment2::from_coords(0.0_f64, 0.0, 1.0, 1.0)];
        assert!(intersections(&one).is_empty());
    }
}
