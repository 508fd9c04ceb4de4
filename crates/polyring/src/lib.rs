//! 2D simple-polygon kernel for layout, packing and CAD-style tooling.
//!
//! Scope
//! - Rings of planar points: area, rigid transforms, cached bounding boxes,
//!   containment, convexity, winding, boundary crossing, and union of two
//!   touching rings.
//! - No polygon clipping with holes, no self-intersection repair, no
//!   triangulation. Pairwise operations are O(n·m).
//!
//! API Policy
//! - `ring2` is the implementation; `api` and `prelude` are curated re-exports.

pub mod api;
pub mod ring2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ring2::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::ring2::{
        BoundaryCrossing, Containment, GeomCfg, Orientation, Rect2, Ring2, RingError, UnionError,
    };
    pub use nalgebra::{vector, Vector2 as Vec2};
}
