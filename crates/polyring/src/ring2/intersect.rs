//! Boundary crossing detection between two rings (O(n·m) edge scan).
//!
//! Only boundary crossings are reported: a ring nested inside another without
//! any crossing edge yields `NoCrossing`. Combine with `contains_point` when
//! overlap semantics are needed.
//!
//! Touch handling
//! - When an endpoint of one edge lies on the other edge (or two endpoints
//!   coincide), the boundaries may only touch. The neighbours on either side of
//!   the touch point are classified against the opposite ring; a sign change
//!   (`Inside` ↔ `Outside`) is a crossing, equal signs are a tangency.
//! - If either neighbour is `Indeterminate` (it sits on the other boundary, as
//!   with shared edges) the touch is recorded as ambiguous and the scan goes on.
//!   A later definite crossing still wins.

use nalgebra::Vector2;
use tracing::{debug, trace};

use super::index::RingIndex;
use super::ring::Ring2;
use super::types::{BoundaryCrossing, Containment};
use super::util::{on_segment, segment_intersection};

/// Verdict for a single touch point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Touch {
    Crosses,
    Tangent,
    Ambiguous,
}

fn touch_verdict(before: Containment, after: Containment) -> Touch {
    match (before, after) {
        (Containment::Inside, Containment::Outside)
        | (Containment::Outside, Containment::Inside) => Touch::Crosses,
        (Containment::Indeterminate, _) | (_, Containment::Indeterminate) => Touch::Ambiguous,
        _ => Touch::Tangent,
    }
}

/// Edge `i` of a ring together with its outer neighbours.
///
/// `before` precedes `start`, `after` follows `end`; a neighbour that coincides
/// with its endpoint (zero-length wrap edge) is skipped once.
#[derive(Clone, Copy, Debug)]
struct EdgeStencil {
    before: Vector2<f64>,
    start: Vector2<f64>,
    end: Vector2<f64>,
    after: Vector2<f64>,
}

impl EdgeStencil {
    fn at(pts: &[Vector2<f64>], i: usize) -> Self {
        let ix = RingIndex::new(pts.len());
        let s = i;
        let e = ix.next(s);
        let mut b = ix.prev(s);
        if pts[b] == pts[s] {
            b = ix.prev(b);
        }
        let mut a = ix.next(e);
        if pts[a] == pts[e] {
            a = ix.next(a);
        }
        Self {
            before: pts[b],
            start: pts[s],
            end: pts[e],
            after: pts[a],
        }
    }
}

impl Ring2 {
    /// Scan all edge pairs for a boundary crossing; see module docs.
    pub fn crossing(&self, other: &Ring2) -> BoundaryCrossing {
        if self.is_degenerate() || other.is_degenerate() {
            return BoundaryCrossing::Degenerate;
        }
        let cfg = self.cfg();
        let eps = cfg.eps_segment;
        let mut ambiguous = false;

        for i in 0..self.len() {
            let a = EdgeStencil::at(self.points(), i);
            for j in 0..other.len() {
                let b = EdgeStencil::at(other.points(), j);

                // Four touch cases; the first that applies decides this pair.
                let touch = if on_segment(a.start, a.end, b.start, eps) || a.start == b.start {
                    Some(touch_verdict(
                        self.contains_point(b.before),
                        self.contains_point(b.end),
                    ))
                } else if on_segment(a.start, a.end, b.end, eps) || a.end == b.end {
                    Some(touch_verdict(
                        self.contains_point(b.start),
                        self.contains_point(b.after),
                    ))
                } else if on_segment(b.start, b.end, a.start, eps) || a.start == b.end {
                    Some(touch_verdict(
                        other.contains_point(a.before),
                        other.contains_point(a.end),
                    ))
                } else if on_segment(b.start, b.end, a.end, eps) || a.end == b.start {
                    Some(touch_verdict(
                        other.contains_point(a.start),
                        other.contains_point(a.after),
                    ))
                } else {
                    None
                };

                match touch {
                    Some(Touch::Crosses) => {
                        trace!(edge_self = i, edge_other = j, "touch point crosses");
                        return BoundaryCrossing::Crossing;
                    }
                    Some(Touch::Ambiguous) => {
                        trace!(edge_self = i, edge_other = j, "ambiguous touch point");
                        ambiguous = true;
                    }
                    Some(Touch::Tangent) => {}
                    None => {
                        if segment_intersection(
                            b.start,
                            b.end,
                            a.start,
                            a.end,
                            cfg.eps_parallel,
                            eps,
                        )
                        .is_some()
                        {
                            return BoundaryCrossing::Crossing;
                        }
                    }
                }
            }
        }

        if ambiguous {
            debug!(
                len_self = self.len(),
                len_other = other.len(),
                "boundary scan ended with unresolved touch points"
            );
            BoundaryCrossing::Ambiguous
        } else {
            BoundaryCrossing::NoCrossing
        }
    }

    /// Boolean view of `crossing`: `true` only for a definite crossing.
    ///
    /// Ambiguous touches and degenerate inputs report `false`.
    #[inline]
    pub fn intersects(&self, other: &Ring2) -> bool {
        self.crossing(other).is_crossing()
    }
}
