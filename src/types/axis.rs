//! Coordinate axis identifiers.

use std::fmt;

/// One of the three spatial axes of a mesh block.
///
/// Blocks are always logically three-dimensional; a 1D or 2D simulation
/// simply has degenerate (single-cell) trailing axes. Using an enum instead
/// of a bare `usize` prevents mixing up axis numbers with cell indices.
///
/// # Example
///
/// ```
/// use fvgeom_rs::types::Axis;
///
/// assert_eq!(Axis::X2.index(), 1);
/// assert_eq!(Axis::ALL[2], Axis::X3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// First axis (x-direction, the contiguous sweep direction).
    X1,
    /// Second axis (y-direction).
    X2,
    /// Third axis (z-direction).
    X3,
}

impl Axis {
    /// All three axes in order.
    pub const ALL: [Axis; 3] = [Axis::X1, Axis::X2, Axis::X3];

    /// Zero-based index of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X1 => 0,
            Axis::X2 => 1,
            Axis::X3 => 2,
        }
    }

    /// The other two axes, in cyclic order.
    ///
    /// `X1.transverse()` is `(X2, X3)`, `X2.transverse()` is `(X3, X1)`,
    /// `X3.transverse()` is `(X1, X2)`.
    #[inline]
    pub const fn transverse(self) -> (Axis, Axis) {
        match self {
            Axis::X1 => (Axis::X2, Axis::X3),
            Axis::X2 => (Axis::X3, Axis::X1),
            Axis::X3 => (Axis::X1, Axis::X2),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X1 => write!(f, "x1"),
            Axis::X2 => write!(f, "x2"),
            Axis::X3 => write!(f, "x3"),
        }
    }
}
