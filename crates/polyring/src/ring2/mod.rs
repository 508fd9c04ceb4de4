//! Simple polygon rings in 2D (vertex representation).
//!
//! Purpose
//! - One ring type (`Ring2`) with eagerly cached bounds, in-place rigid
//!   transforms, and the queries layout/packing code needs: containment,
//!   convexity, winding, rectangle shape, boundary crossing, and union.
//!
//! Assumptions and conventions
//! - Points are `nalgebra::Vector2<f64>`; point equality is exact `==`.
//!   Tolerances (`GeomCfg`) apply only where a predicate says so.
//! - Counter-clockwise is positive area. Nothing assumes construction order;
//!   use `orientation()` / `set_anticlockwise()`.
//! - Under 3 points a ring is degenerate: bounds are `None`, containment is
//!   `Indeterminate`, crossing is `Degenerate`, union fails.
//! - Intersection and union are O(n·m); inputs are expected to be small.
//!
//! Code cross-refs: `Ring2`, `RingIndex`, `GeomCfg`, `Containment`, `BoundaryCrossing`

mod classify;
mod error;
mod index;
mod intersect;
pub mod rand;
mod ring;
mod types;
mod union;
mod util;

pub use error::{RingError, UnionError};
pub use index::RingIndex;
pub use ring::Ring2;
pub use types::{BoundaryCrossing, Containment, GeomCfg, Orientation, Rect2};
pub use util::{blend, fuzzy_eq, on_segment, segment_intersection, z_cross};

#[cfg(test)]
mod tests;
