//! Per-axis cell counts of a mesh block.

use super::Axis;

/// Active (non-ghost) cell counts of a block along each axis.
///
/// An axis with exactly one cell is *degenerate*: the simulation has no
/// physical extent to resolve along it, so the axis carries no ghost cells
/// and gets special treatment when cell-center spacings are derived.
///
/// # Example
///
/// ```
/// use fvgeom_rs::types::{Axis, Extents};
///
/// // A 2D simulation: 64 x 32 cells, single cell along x3.
/// let ext = Extents::new(64, 32, 1);
/// assert_eq!(ext.dimensionality(), 2);
/// assert!(ext.is_degenerate(Axis::X3));
/// assert_eq!(ext.cells(Axis::X1), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extents {
    nx1: usize,
    nx2: usize,
    nx3: usize,
}

impl Extents {
    /// Create extents from per-axis active cell counts.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero, or if a degenerate axis precedes an
    /// extended one (a 2D block must extend along x1 and x2, not x1 and x3).
    pub fn new(nx1: usize, nx2: usize, nx3: usize) -> Self {
        assert!(nx1 > 0 && nx2 > 0 && nx3 > 0, "cell counts must be positive");
        assert!(
            !(nx2 == 1 && nx3 > 1),
            "x3 cannot be extended while x2 is degenerate"
        );
        Self { nx1, nx2, nx3 }
    }

    /// Active cell count along an axis.
    #[inline]
    pub fn cells(&self, axis: Axis) -> usize {
        match axis {
            Axis::X1 => self.nx1,
            Axis::X2 => self.nx2,
            Axis::X3 => self.nx3,
        }
    }

    /// Whether an axis has no physical extent (exactly one cell).
    #[inline]
    pub fn is_degenerate(&self, axis: Axis) -> bool {
        self.cells(axis) == 1
    }

    /// Number of extended axes (1, 2, or 3).
    pub fn dimensionality(&self) -> usize {
        Axis::ALL.iter().filter(|&&a| !self.is_degenerate(a)).count().max(1)
    }

    /// Total number of active cells in the block.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.nx1 * self.nx2 * self.nx3
    }
}
