//! hull2d - Convex hull construction and segment intersection for 2D point sets
//!
//! This library is the computational core behind an interactive canvas tool: the
//! caller collects clicked points and drawn segments, hands them in, and renders
//! whatever comes back. Five convex hull algorithms are implemented side by side
//! so their outputs (and running times) can be compared on the same input — they
//! all agree on the hull vertex set and all return it in counter-clockwise order.
//!
//! Every function here is pure: no state is retained between calls, and no input
//! maps to a failure. Degenerate inputs (fewer than three points, collinear sets,
//! zero-length segments, parallel lines) produce well-defined trivial results.

pub mod error;
pub mod hull;
pub mod intersect;
pub mod predicates;
pub mod primitives;

pub use error::HullError;
pub use hull::{convex_hull, point_in_hull, Algorithm};
pub use intersect::{crossing_point, intersections};
pub use predicates::{orient2d, Orientation};
pub use primitives::{Point2, Segment2, Vec2};
