//! Union of two touching or overlapping simple rings by boundary walking.
//!
//! Outline
//! 1. The lowest vertex over both rings (leftmost among equal heights) is on the
//!    merged boundary; its owner is the start ring `A`, the other is `B`.
//! 2. Walk `A` forward from the start until a vertex coincides with a vertex of
//!    `B`, a `B` vertex lies on the current `A` edge, or the `A` vertex lies on a
//!    `B` edge. That `B` index is the first intercept; among several contacts on
//!    one edge the one nearest the walking vertex is taken.
//! 3. Walk `A` backward from just before the start, prepending, until the second
//!    intercept.
//! 4. Splice `B` from after the first intercept through the second.
//! 5. Drop adjacent duplicates (including across the wrap), then vertices that
//!    lie on the segment between their neighbours, such as the joins left where
//!    a shared edge met the rest of the outline.
//! 6. Separate non-adjacent duplicates: each copy whose local turn disagrees with
//!    the ring winding (reflex at that copy) is pulled 5% toward its previous
//!    neighbour.
//!
//! Both inputs are walked in counter-clockwise order whatever order they were
//! built in, and the result is counter-clockwise. Collinear vertices of the
//! inputs are dropped along with the joins.
//!
//! Step 6 is a numerical tie-break, not an exact resolution: the output differs
//! from the true union by that perturbation at pinch points.

use std::collections::VecDeque;

use nalgebra::Vector2;
use tracing::{debug, trace};

use super::error::UnionError;
use super::index::RingIndex;
use super::ring::Ring2;
use super::util::{blend, on_segment, z_cross};

/// Weight kept by a duplicate vertex when it is nudged toward its predecessor.
const NUDGE_KEEP: f64 = 0.95;

/// How the walking ring first met the other ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Contact {
    /// `A[cur] == B[j]`.
    Vertex,
    /// `B[j]` lies on the current `A` edge.
    OnWalkEdge,
    /// `A[cur]` lies on the `B` edge `j → j+1`.
    OnOtherEdge,
}

/// `B` index touching the `A` edge `cur → next` closest to `cur`, if any.
///
/// A vertex coincidence wins outright. Otherwise candidates are ranked by the
/// distance of the contact point from `cur` along the walk edge, so the first
/// `B` vertex met on a partially shared edge is taken.
fn find_contact(
    cur: Vector2<f64>,
    next: Vector2<f64>,
    b: &[Vector2<f64>],
    eps: f64,
) -> Option<(usize, Contact)> {
    let ib = RingIndex::new(b.len());
    let mut best: Option<(usize, Contact, f64)> = None;
    for j in 0..b.len() {
        let (contact, dist) = if cur == b[j] {
            return Some((j, Contact::Vertex));
        } else if on_segment(cur, next, b[j], eps) {
            (Contact::OnWalkEdge, (b[j] - cur).norm())
        } else if on_segment(b[j], b[ib.next(j)], cur, eps) {
            (Contact::OnOtherEdge, 0.0)
        } else {
            continue;
        };
        if best.map_or(true, |(_, _, d)| dist < d) {
            best = Some((j, contact, dist));
        }
    }
    best.map(|(j, contact, _)| (j, contact))
}

/// Strictly below, or level and strictly left.
#[inline]
fn lower(p: Vector2<f64>, q: Vector2<f64>) -> bool {
    p.y < q.y || (p.y == q.y && p.x < q.x)
}

/// Index of the lowest vertex (leftmost among equal heights; earliest on full ties).
fn lowest(pts: &[Vector2<f64>]) -> usize {
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        if lower(*p, pts[best]) {
            best = i;
        }
    }
    best
}

impl Ring2 {
    /// Merged outer boundary of `self` and `other`; empty ring on any failure.
    ///
    /// Use `try_union` to learn why a merge failed.
    pub fn union(&self, other: &Ring2) -> Ring2 {
        self.try_union(other).unwrap_or_else(|err| {
            debug!(%err, "union failed");
            Ring2::empty(self.cfg())
        })
    }

    /// Merged outer boundary of `self` and `other`; inputs are not modified.
    ///
    /// The result carries `self`'s tolerances.
    pub fn try_union(&self, other: &Ring2) -> Result<Ring2, UnionError> {
        if self.is_degenerate() || other.is_degenerate() {
            return Err(UnionError::DegenerateInput {
                len_self: self.len(),
                len_other: other.len(),
            });
        }
        let cfg = self.cfg();
        let eps = cfg.eps_segment;

        // the walk assumes counter-clockwise rings
        let mut lhs = self.clone();
        lhs.set_anticlockwise();
        let mut rhs = other.clone();
        rhs.set_anticlockwise();

        let start_self = lowest(lhs.points());
        let start_other = lowest(rhs.points());
        let (a, b, start) = if lower(rhs.points()[start_other], lhs.points()[start_self]) {
            (rhs.points(), lhs.points(), start_other)
        } else {
            (lhs.points(), rhs.points(), start_self)
        };
        let ia = RingIndex::new(a.len());
        let ib = RingIndex::new(b.len());

        let mut out: VecDeque<Vector2<f64>> = VecDeque::with_capacity(a.len() + b.len() + 2);

        // forward
        let mut first = None;
        let mut cur = start;
        for _ in 0..=a.len() {
            let next = ia.next(cur);
            if let Some((j, contact)) = find_contact(a[cur], a[next], b, eps) {
                trace!(a = cur, b = j, ?contact, "forward contact");
                out.push_back(a[cur]);
                match contact {
                    Contact::Vertex => {}
                    Contact::OnWalkEdge => out.push_back(b[j]),
                    Contact::OnOtherEdge => out.push_back(b[ib.next(j)]),
                }
                first = Some(j);
                break;
            }
            out.push_back(a[cur]);
            cur = next;
        }
        let first = first.ok_or(UnionError::NoForwardTouch)?;

        // backward
        let mut second = None;
        let mut cur = ia.prev(start);
        for _ in 0..=a.len() {
            let next = ia.prev(cur);
            if let Some((j, contact)) = find_contact(a[cur], a[next], b, eps) {
                trace!(a = cur, b = j, ?contact, "backward contact");
                out.push_front(a[cur]);
                if contact == Contact::OnWalkEdge {
                    out.push_front(b[j]);
                }
                second = Some(j);
                break;
            }
            out.push_front(a[cur]);
            cur = next;
        }
        let second = second.ok_or(UnionError::NoBackwardTouch)?;

        // splice the part of B between the intercepts
        let mut cur = ib.next(first);
        for _ in 0..b.len() {
            out.push_back(b[cur]);
            if cur == second {
                break;
            }
            cur = ib.next(cur);
        }

        let mut pts: Vec<Vector2<f64>> = out.into();
        dedup_adjacent(&mut pts);
        drop_collinear(&mut pts, eps);
        if pts.len() < 3 {
            return Err(UnionError::Collapsed { len: pts.len() });
        }
        separate_duplicates(&mut pts);
        Ok(Ring2::with_cfg(pts, cfg))
    }
}

/// Remove `pts[i]` while it equals its cyclic successor.
fn dedup_adjacent(pts: &mut Vec<Vector2<f64>>) {
    let mut i = 0;
    while i < pts.len() && pts.len() > 1 {
        let next = RingIndex::new(pts.len()).next(i);
        if pts[i] == pts[next] {
            pts.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Remove vertices lying on the segment between their neighbours.
///
/// Passes repeat until nothing changes; a ring is never cut below 3 points.
fn drop_collinear(pts: &mut Vec<Vector2<f64>>, eps: f64) {
    loop {
        let before = pts.len();
        let mut i = 0;
        while i < pts.len() && pts.len() > 3 {
            let ix = RingIndex::new(pts.len());
            if on_segment(pts[ix.prev(i)], pts[ix.next(i)], pts[i], eps) {
                pts.remove(i);
            } else {
                i += 1;
            }
        }
        if pts.len() == before {
            break;
        }
    }
}

/// Nudge reflex copies of repeated vertices toward their predecessor.
fn separate_duplicates(pts: &mut [Vector2<f64>]) {
    let ix = RingIndex::new(pts.len());
    for i in 0..pts.len() {
        let (pi, ni) = (ix.prev(i), ix.next(i));
        for j in (i + 1..pts.len()).rev() {
            if pts[i] != pts[j] {
                continue;
            }
            let (pj, nj) = (ix.prev(j), ix.next(j));
            let right_i = z_cross(pts[pi], pts[i], pts[ni]) < 0.0;
            let right_j = z_cross(pts[pj], pts[j], pts[nj]) < 0.0;
            let ccw = signed_area2(pts) > 0.0;
            trace!(i, j, "separating repeated vertex");
            if ccw == right_i {
                pts[i] = blend(pts[i], pts[pi], NUDGE_KEEP);
            }
            if ccw == right_j {
                pts[j] = blend(pts[j], pts[pj], NUDGE_KEEP);
            }
        }
    }
}

/// Twice the signed area of a raw point slice.
fn signed_area2(pts: &[Vector2<f64>]) -> f64 {
    let ix = RingIndex::new(pts.len());
    (0..pts.len())
        .map(|i| {
            let p = pts[i];
            let q = pts[ix.next(i)];
            p.x * q.y - q.x * p.y
        })
        .sum()
}
