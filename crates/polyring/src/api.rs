//! Curated surface for downstream tools (the CLI and layout code).
//!
//! Prefer these re-exports over reaching into `ring2` submodules; the module
//! layout behind them may change.

// Ring entity and query results
pub use crate::ring2::{
    BoundaryCrossing, Containment, GeomCfg, Orientation, Rect2, Ring2, RingError, RingIndex,
    UnionError,
};
// Point/segment predicates
pub use crate::ring2::{blend, fuzzy_eq, on_segment, segment_intersection, z_cross};
// Random rings
pub use crate::ring2::rand::{
    draw_ring_radial, RadialCfg, ReplayToken as RingReplay, VertexCount,
};

use nalgebra::Vector2;

/// Build a ring from `[x, y]` pairs with an optional uniform tolerance.
pub fn ring_from_xy(xy: &[[f64; 2]], eps: Option<f64>) -> Ring2 {
    let pts: Vec<Vector2<f64>> = xy.iter().map(|&[x, y]| Vector2::new(x, y)).collect();
    match eps {
        Some(e) => Ring2::with_cfg(pts, GeomCfg::uniform(e)),
        None => Ring2::new(pts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn ring_from_xy_applies_tolerance() {
        let sq = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let loose = ring_from_xy(&sq, Some(1e-3));
        let strict = ring_from_xy(&sq, None);
        let near_edge = vector![1.0 + 5e-4, 0.5];
        assert_eq!(loose.contains_point(near_edge), Containment::Indeterminate);
        assert_eq!(strict.contains_point(near_edge), Containment::Outside);
        assert_eq!(strict.cfg(), GeomCfg::default());
    }
}
