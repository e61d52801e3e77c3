//! Divide-and-conquer hull with tangent merging.

use super::{dedup_points, graham_scan_hull, lexicographic};
use crate::predicates::{orient2d, Orientation};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull by divide and conquer in the Kirkpatrick–Seidel
/// style, O(n log n): lexicographically sorted points are split at the
/// midpoint, halves of at most five points are solved by Graham's scan, and
/// adjacent sub-hulls are joined along their upper and lower common tangents.
pub fn kirkpatrick_seidel_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut points = dedup_points(points);
    if points.len() < 3 {
        return points;
    }

    points.sort_by(lexicographic);
    build(&points)
}

fn build<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() <= 5 {
        return graham_scan_hull(points);
    }
    let mid = points.len() / 2;
    let left = build(&points[..mid]);
    let right = build(&points[mid..]);
    merge(&left, &right)
}

/// Joins two counter-clockwise sub-hulls, `left` lexicographically at or
/// before `right`, along their common tangents: the right hull walked from
/// the lower to the upper tangent vertex, then the left hull walked from the
/// upper to the lower tangent vertex, form one counter-clockwise cycle.
/// Vertices between the tangent touch points, including points interior to a
/// collinear tangent run, fall outside both arcs and disappear.
fn merge<F: Float>(left: &[Point2<F>], right: &[Point2<F>]) -> Vec<Point2<F>> {
    let (upper_l, upper_r) = tangent(left, right, Orientation::CounterClockwise);
    let (lower_l, lower_r) = tangent(left, right, Orientation::Clockwise);

    let mut hull = Vec::new();
    push_arc(&mut hull, right, lower_r, upper_r);
    push_arc(&mut hull, left, upper_l, lower_l);
    hull
}

/// Appends the counter-clockwise arc of `hull` from `from` to `to`, inclusive.
fn push_arc<F: Float>(out: &mut Vec<Point2<F>>, hull: &[Point2<F>], from: usize, to: usize) {
    let mut i = from;
    loop {
        out.push(hull[i]);
        if i == to {
            break;
        }
        i = (i + 1) % hull.len();
    }
}

/// Finds the common tangent of two sub-hulls on the given `outside` turn
/// side: a vertex pair (one index per hull) whose connecting line keeps every
/// vertex of both hulls off its `outside` side. `CounterClockwise` selects
/// the upper tangent, `Clockwise` the lower.
///
/// The common case is a rotating support-line walk from the hulls' facing
/// extremes. Duplicate x-coordinates at the split can strand the walk (the
/// halves may touch along a shared vertical line), so the walk's result is
/// verified against every vertex and, on failure, recomputed by an exhaustive
/// support-line search over all vertex pairs. The walk is never allowed to
/// assume the sub-hulls share a vertex at the split boundary.
fn tangent<F: Float>(
    left: &[Point2<F>],
    right: &[Point2<F>],
    outside: Orientation,
) -> (usize, usize) {
    let (nl, nr) = (left.len(), right.len());
    let mut il = rightmost(left);
    let mut ir = leftmost(right);

    // A candidate vertex escapes the current line when it sits on the outside
    // turn side; a collinear candidate still advances the walk when it widens
    // the span between the tangent endpoints, which resolves collinear touch
    // runs to their extreme points.
    let escapes = |line_l: Point2<F>, line_r: Point2<F>, anchor: Point2<F>, current: Point2<F>, candidate: Point2<F>| {
        match orient2d(line_l, line_r, candidate) {
            o if o == outside => true,
            Orientation::Collinear => {
                anchor.distance_squared(candidate) > anchor.distance_squared(current)
            }
            _ => false,
        }
    };

    // The upper tangent walks the left hull counter-clockwise and the right
    // hull clockwise; both directions flip for the lower tangent.
    let upper = outside == Orientation::CounterClockwise;
    let step_l = |i: usize| if upper { (i + 1) % nl } else { (i + nl - 1) % nl };
    let step_r = |i: usize| if upper { (i + nr - 1) % nr } else { (i + 1) % nr };

    let mut fuel = 2 * (nl + nr);
    loop {
        let mut moved = false;
        while nl > 1 && fuel > 0 {
            let candidate = left[step_l(il)];
            if escapes(left[il], right[ir], right[ir], left[il], candidate) {
                il = step_l(il);
                moved = true;
                fuel -= 1;
            } else {
                break;
            }
        }
        while nr > 1 && fuel > 0 {
            let candidate = right[step_r(ir)];
            if escapes(left[il], right[ir], left[il], right[ir], candidate) {
                ir = step_r(ir);
                moved = true;
                fuel -= 1;
            } else {
                break;
            }
        }
        if !moved || fuel == 0 {
            break;
        }
    }

    if is_support_line(left, right, left[il], right[ir], outside) {
        (il, ir)
    } else {
        support_line_search(left, right, outside)
    }
}

/// True when no vertex of either hull lies on the `outside` side of the
/// directed line through `line_l` and `line_r`.
fn is_support_line<F: Float>(
    left: &[Point2<F>],
    right: &[Point2<F>],
    line_l: Point2<F>,
    line_r: Point2<F>,
    outside: Orientation,
) -> bool {
    left.iter()
        .chain(right.iter())
        .all(|&v| orient2d(line_l, line_r, v) != outside)
}

/// Exhaustive tangent fallback: every vertex pair is tested as a support
/// line and the widest qualifying pair wins, so collinear touch runs resolve
/// to their extreme endpoints here too.
fn support_line_search<F: Float>(
    left: &[Point2<F>],
    right: &[Point2<F>],
    outside: Orientation,
) -> (usize, usize) {
    let mut best: Option<(usize, usize)> = None;
    let mut best_span = F::zero();
    for i in 0..left.len() {
        for j in 0..right.len() {
            if !is_support_line(left, right, left[i], right[j], outside) {
                continue;
            }
            let span = left[i].distance_squared(right[j]);
            if best.is_none() || span > best_span {
                best = Some((i, j));
                best_span = span;
            }
        }
    }
    // A common tangent always exists for x-separated sub-hulls; the facing
    // extremes stand in if floating-point noise rejects every pair.
    best.unwrap_or((rightmost(left), leftmost(right)))
}

fn leftmost<F: Float>(hull: &[Point2<F>]) -> usize {
    extreme(hull, Ordering::Less)
}

fn rightmost<F: Float>(hull: &[Point2<F>]) -> usize {
    extreme(hull, Ordering::Greater)
}

fn extreme<F: Float>(hull: &[Point2<F>], which: Ordering) -> usize {
    let mut idx = 0;
    for i in 1..hull.len() {
        if lexicographic(&hull[i], &hull[idx]) == which {
            idx = i;
        }
    }
    idx
}
