use std::fmt;

/// Errors from ring mutators that need a valid vertex or a defined bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingError {
    /// The requested vertex does not exist.
    IndexOutOfRange { index: usize, len: usize },
    /// The ring has fewer than 3 points, so its bounds are undefined.
    Degenerate { len: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {} out of range for ring of {} points", index, len)
            }
            RingError::Degenerate { len } => {
                write!(f, "ring has {} points (needs ≥3 for bounds)", len)
            }
        }
    }
}

impl std::error::Error for RingError {}

/// Reasons `Ring2::try_union` gives up. `Ring2::union` collapses all of them
/// into an empty ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnionError {
    /// One input has fewer than 3 points.
    DegenerateInput { len_self: usize, len_other: usize },
    /// Walking forward from the lowest vertex never touched the other ring.
    NoForwardTouch,
    /// Walking backward from the lowest vertex never touched the other ring.
    NoBackwardTouch,
    /// The merged boundary has fewer than 3 distinct points after deduplication.
    Collapsed { len: usize },
}

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnionError::DegenerateInput {
                len_self,
                len_other,
            } => write!(
                f,
                "union needs two rings with ≥3 points (got {} and {})",
                len_self, len_other
            ),
            UnionError::NoForwardTouch => {
                write!(f, "rings do not touch (forward walk found no contact)")
            }
            UnionError::NoBackwardTouch => {
                write!(f, "rings do not touch (backward walk found no contact)")
            }
            UnionError::Collapsed { len } => {
                write!(f, "merged boundary collapsed to {} points", len)
            }
        }
    }
}

impl std::error::Error for UnionError {}
