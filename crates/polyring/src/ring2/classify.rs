//! Point containment and shape predicates on a single ring.

use nalgebra::Vector2;

use super::index::RingIndex;
use super::ring::Ring2;
use super::types::{Containment, Orientation};
use super::util::{fuzzy_eq, fuzzy_eq_pt, on_segment, z_cross};

impl Ring2 {
    /// Even-odd ray cast along +x.
    ///
    /// Returns `Indeterminate` for rings below 3 points and for query points on a
    /// vertex or an edge (within tolerance). Near-zero-length edges are skipped.
    pub fn contains_point(&self, p: Vector2<f64>) -> Containment {
        let pts = self.points();
        let n = pts.len();
        if n < 3 {
            return Containment::Indeterminate;
        }
        let cfg = self.cfg();
        let ix = RingIndex::new(n);
        let mut inside = false;
        for i in 0..n {
            let a = pts[i];
            let b = pts[ix.prev(i)];
            if fuzzy_eq_pt(a, p, cfg.eps_fuzzy) {
                return Containment::Indeterminate;
            }
            if on_segment(a, b, p, cfg.eps_segment) {
                return Containment::Indeterminate;
            }
            if fuzzy_eq_pt(a, b, cfg.eps_fuzzy) {
                continue;
            }
            let straddles = (a.y > p.y) != (b.y > p.y);
            if straddles && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
        }
        if inside {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }

    /// Convex iff every vertex triple turns the same way as the first one.
    ///
    /// Collinear triples count as "not left"; rings below 3 points are reported
    /// as not convex.
    pub fn is_convex(&self) -> bool {
        let pts = self.points();
        let n = pts.len();
        if n < 3 {
            return false;
        }
        let ix = RingIndex::new(n);
        let first = z_cross(pts[0], pts[1], pts[2]) > 0.0;
        (0..n).all(|i| {
            let j = ix.next(i);
            let k = ix.next(j);
            (z_cross(pts[i], pts[j], pts[k]) > 0.0) == first
        })
    }

    pub fn orientation(&self) -> Orientation {
        let a = self.area();
        if a > 0.0 {
            Orientation::CounterClockwise
        } else if a < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    #[inline]
    pub fn is_anticlockwise(&self) -> bool {
        self.orientation() == Orientation::CounterClockwise
    }

    /// Reverse vertex order iff the ring is clockwise. Idempotent.
    pub fn set_anticlockwise(&mut self) {
        if self.orientation() == Orientation::Clockwise {
            self.reverse();
        }
    }

    /// Every vertex sits (within `tolerance`) on a vertical and on a horizontal
    /// side of the bounding box.
    pub fn is_rectangle(&self, tolerance: f64) -> bool {
        let Some(bb) = self.bounds() else {
            return false;
        };
        self.points().iter().all(|p| {
            let on_vertical =
                fuzzy_eq(p.x, bb.left(), tolerance) || fuzzy_eq(p.x, bb.right(), tolerance);
            let on_horizontal =
                fuzzy_eq(p.y, bb.bottom(), tolerance) || fuzzy_eq(p.y, bb.top(), tolerance);
            on_vertical && on_horizontal
        })
    }
}
