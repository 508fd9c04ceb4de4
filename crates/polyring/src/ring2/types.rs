//! Basic 2D value types and tolerances shared by the ring operations.
//!
//! - `GeomCfg`: centralizes the fuzzy-equality and segment tolerances.
//! - `Rect2`: axis-aligned bounding box (`None` stands in for "undefined").
//! - `Containment`, `Orientation`, `BoundaryCrossing`: tagged query results.
//!
//! Code cross-refs: `ring::Ring2`, `util::{fuzzy_eq, on_segment}`

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// All tolerances are absolute; callers working far from unit scale should
/// override them per ring via `Ring2::with_cfg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Coordinate equality used for vertex coincidence and degenerate edges.
    pub eps_fuzzy: f64,
    /// Distance slack for point-on-segment tests.
    pub eps_segment: f64,
    /// Relative cross-product threshold below which two segments count as parallel.
    pub eps_parallel: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_fuzzy: 1e-9,
            eps_segment: 1e-9,
            eps_parallel: 1e-9,
        }
    }
}

impl GeomCfg {
    /// Same tolerance for every predicate.
    #[inline]
    pub fn uniform(eps: f64) -> Self {
        Self {
            eps_fuzzy: eps,
            eps_segment: eps,
            eps_parallel: eps,
        }
    }
}

/// Axis-aligned rectangle `[x, x + width] × [y, y + height]`.
///
/// The two corners are stored as given, so `right()` and `top()` return the
/// extreme coordinates exactly and every point the box was built from passes
/// `contains`. Width and height are derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    min: Vector2<f64>,
    max: Vector2<f64>,
}

impl Rect2 {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Vector2::new(x, y), Vector2::new(x + width, y + height))
    }
    /// Box spanned by `min` and `max`; callers keep `min <= max` per axis.
    #[inline]
    pub fn from_corners(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.min.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.min.y
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.min.y
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.max.y
    }
    /// Corner with the smallest coordinates (the "location" of the box).
    #[inline]
    pub fn min(&self) -> Vector2<f64> {
        self.min
    }
    #[inline]
    pub fn max(&self) -> Vector2<f64> {
        self.max
    }
    /// Closed-box membership.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Point-in-ring classification.
///
/// `Indeterminate` covers everything that is neither strictly inside nor
/// strictly outside: rings with fewer than 3 points, a query point on a vertex,
/// and a query point on an edge. Intersection detection branches on exactly this
/// distinction, so it is never folded into `Outside`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    Inside,
    Outside,
    Indeterminate,
}

/// Winding of a ring, inferred from the sign of its shoelace area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Zero signed area (all points collinear, or fewer than 3 points).
    Collinear,
}

/// Result of scanning two ring boundaries for a crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryCrossing {
    /// Some edge pair crosses (including a touch point with a sign change).
    Crossing,
    /// Every edge pair was resolved and none crosses.
    NoCrossing,
    /// No crossing was found, but at least one touch point had a neighbour whose
    /// containment was `Indeterminate` (e.g. shared edges). Whether that touch is
    /// a crossing is left to the caller.
    Ambiguous,
    /// One of the rings has fewer than 3 points.
    Degenerate,
}

impl BoundaryCrossing {
    #[inline]
    pub fn is_crossing(self) -> bool {
        matches!(self, BoundaryCrossing::Crossing)
    }
}
