//! The orientation predicate shared by every algorithm in the crate.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
///
/// This tri-state is the sole turn-direction building block used by the hull
/// algorithms and the intersection detector. One sign convention holds
/// everywhere: counter-clockwise is the positive (left-turn) direction, and
/// hulls are emitted in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn counter-clockwise (positive signed area).
    CounterClockwise,
    /// Points turn clockwise (negative signed area).
    Clockwise,
    /// Points are collinear (zero signed area).
    Collinear,
}

impl Orientation {
    /// The orientation with the turn direction reversed.
    ///
    /// Swapping the last two arguments of [`orient2d`] produces this value.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Computes the orientation of the ordered point triple `(a, b, c)`.
///
/// The result is the sign of the cross product `(b - a) × (c - a)`, twice the
/// signed area of triangle abc:
/// - `CounterClockwise` if `c` is to the left of the directed line `a -> b`
/// - `Clockwise` if `c` is to the right
/// - `Collinear` if `c` is on the line
///
/// The test is exact up to the precision of `F`; no tolerance is applied. If
/// `a == b` the result is `Collinear` for every `c`, which is what makes
/// zero-length segments inert in the intersection detector.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    let cross = (b - a).cross(c - a);
    if cross > F::zero() {
        Orientation::CounterClockwise
    } else if cross < F::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
