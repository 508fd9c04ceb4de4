//! Polygon ring: ordered vertices with implicit closing edge and cached bounds.
//!
//! Invariants
//! - Edge `i` connects `pts[i]` to `pts[(i + 1) % n]`; the closing edge is never stored.
//! - `bounds` is recomputed after every mutation that can move a vertex; it is
//!   `None` exactly when the ring has fewer than 3 points.
//! - Mutators take `&mut self`; clone the ring first if an untouched copy is needed.
//!
//! Code cross-refs: `types::{Rect2, GeomCfg}`, `classify`, `intersect`, `union`

use nalgebra::{Rotation2, Vector2};

use super::error::RingError;
use super::types::{GeomCfg, Rect2};

/// Simple polygon ring in the plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring2 {
    pts: Vec<Vector2<f64>>,
    bounds: Option<Rect2>,
    cfg: GeomCfg,
}

impl Ring2 {
    /// Ring with default tolerances.
    pub fn new(pts: Vec<Vector2<f64>>) -> Self {
        Self::with_cfg(pts, GeomCfg::default())
    }

    pub fn with_cfg(pts: Vec<Vector2<f64>>, cfg: GeomCfg) -> Self {
        let bounds = bounds_of(&pts);
        Self { pts, bounds, cfg }
    }

    /// Empty ring carrying `cfg` (the failure value of `union`).
    #[inline]
    pub fn empty(cfg: GeomCfg) -> Self {
        Self {
            pts: Vec::new(),
            bounds: None,
            cfg,
        }
    }

    /// Build from plain `[x, y]` pairs.
    pub fn from_xy(xy: &[[f64; 2]]) -> Self {
        xy.iter().map(|&[x, y]| Vector2::new(x, y)).collect()
    }

    /// Export as plain `[x, y]` pairs.
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.pts.iter().map(|p| [p.x, p.y]).collect()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.pts
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    /// Fewer than 3 points: no area, bounds or containment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.pts.len() < 3
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }
    /// Replace the tolerances; geometry is unchanged.
    #[inline]
    pub fn set_cfg(&mut self, cfg: GeomCfg) {
        self.cfg = cfg;
    }

    /// Cached bounding box (`None` below 3 points).
    #[inline]
    pub fn bounds(&self) -> Option<Rect2> {
        self.bounds
    }

    /// Signed shoelace area: positive for counter-clockwise rings, 0 below 3 points.
    pub fn area(&self) -> f64 {
        let n = self.pts.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let p = self.pts[i];
            let q = self.pts[(i + 1) % n];
            twice += p.x * q.y - q.x * p.y;
        }
        0.5 * twice
    }

    /// Append a vertex (becomes the last point before the closing edge).
    pub fn push(&mut self, p: Vector2<f64>) {
        self.pts.push(p);
        self.refresh_bounds();
    }

    /// Overwrite one vertex.
    pub fn set_point(&mut self, index: usize, p: Vector2<f64>) -> Result<(), RingError> {
        let len = self.pts.len();
        let slot = self
            .pts
            .get_mut(index)
            .ok_or(RingError::IndexOutOfRange { index, len })?;
        *slot = p;
        self.refresh_bounds();
        Ok(())
    }

    /// Rotate every vertex about the origin by `angle_deg` degrees (CCW positive).
    ///
    /// To rotate about another pivot, translate it to the origin first.
    pub fn rotate(&mut self, angle_deg: f64) {
        let rot = Rotation2::new(angle_deg.to_radians());
        for p in self.pts.iter_mut() {
            *p = rot * *p;
        }
        self.refresh_bounds();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        let d = Vector2::new(dx, dy);
        for p in self.pts.iter_mut() {
            *p += d;
        }
        self.refresh_bounds();
    }

    /// Translate so that the bounding-box origin (min x, min y) lands on `at`.
    pub fn set_location(&mut self, at: Vector2<f64>) -> Result<(), RingError> {
        let b = self.bounds.ok_or(RingError::Degenerate {
            len: self.pts.len(),
        })?;
        let d = at - b.min();
        self.translate(d.x, d.y);
        Ok(())
    }

    /// Coordinate form of `set_location`.
    #[inline]
    pub fn set_location_xy(&mut self, x: f64, y: f64) -> Result<(), RingError> {
        self.set_location(Vector2::new(x, y))
    }

    /// Translate so that vertex `index` lands on `at`.
    ///
    /// Out-of-range indices leave the ring untouched and report an error.
    pub fn set_position(&mut self, at: Vector2<f64>, index: usize) -> Result<(), RingError> {
        let p = *self.pts.get(index).ok_or(RingError::IndexOutOfRange {
            index,
            len: self.pts.len(),
        })?;
        let d = at - p;
        self.translate(d.x, d.y);
        Ok(())
    }

    /// Coordinate form of `set_position`.
    #[inline]
    pub fn set_position_xy(&mut self, x: f64, y: f64, index: usize) -> Result<(), RingError> {
        self.set_position(Vector2::new(x, y), index)
    }

    /// Reverse vertex order in place (flips orientation).
    pub(crate) fn reverse(&mut self) {
        self.pts.reverse();
    }

    fn refresh_bounds(&mut self) {
        self.bounds = bounds_of(&self.pts);
    }
}

/// Single scan for extremal coordinates; `None` below 3 points.
pub(crate) fn bounds_of(pts: &[Vector2<f64>]) -> Option<Rect2> {
    if pts.len() < 3 {
        return None;
    }
    let first = pts[0];
    let (mut xmin, mut xmax, mut ymin, mut ymax) = (first.x, first.x, first.y, first.y);
    for p in &pts[1..] {
        xmin = xmin.min(p.x);
        xmax = xmax.max(p.x);
        ymin = ymin.min(p.y);
        ymax = ymax.max(p.y);
    }
    Some(Rect2::from_corners(
        Vector2::new(xmin, ymin),
        Vector2::new(xmax, ymax),
    ))
}

impl From<Vec<Vector2<f64>>> for Ring2 {
    fn from(pts: Vec<Vector2<f64>>) -> Self {
        Ring2::new(pts)
    }
}

impl FromIterator<Vector2<f64>> for Ring2 {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        Ring2::new(iter.into_iter().collect())
    }
}
