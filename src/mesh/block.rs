//! Mesh block: per-axis face, center, and spacing arrays.
//!
//! A block is a rectangular sub-region of the simulation domain, the unit of
//! spatial decomposition. Along each axis it stores the cell interface (face)
//! positions over the ghost-extended index range, the face-to-face widths,
//! and the derived cell-center positions and center-to-center spacings. The
//! face arrays are fixed at construction; the center and spacing arrays are
//! written exactly once, by the coordinate system built for the block, since
//! where the "center" of a cell sits depends on the metric.

use std::ops::RangeInclusive;

use crate::types::{Axis, Extents, Real};

/// Geometry arrays for one axis of a block.
///
/// Indices run over the ghost-extended range `0..n_cells`, with the active
/// cells occupying `[ghost, ghost + active - 1]`. A degenerate axis (one
/// active cell) carries no ghost cells.
#[derive(Clone, Debug)]
pub(crate) struct AxisGrid {
    /// Face positions, `n_cells + 1` entries, strictly increasing.
    faces: Vec<Real>,
    /// Face-to-face cell widths, `n_cells` entries.
    face_widths: Vec<Real>,
    /// Cell-center positions, `n_cells` entries. Written once by the
    /// coordinate system.
    centers: Vec<Real>,
    /// Center-to-center spacings, one per interior gap:
    /// `max(n_cells - 1, 1)` entries. The single entry of a degenerate axis
    /// holds the face-to-face width instead.
    center_spacings: Vec<Real>,
    /// Ghost cells on each side (0 for a degenerate axis).
    ghost: usize,
}

impl AxisGrid {
    /// Build from ghost-extended face positions.
    ///
    /// `faces` must be strictly increasing with at least two entries;
    /// the builder validates this before calling.
    pub(crate) fn new(faces: Vec<Real>, ghost: usize) -> Self {
        debug_assert!(faces.len() >= 2);
        let n_cells = faces.len() - 1;
        debug_assert!(n_cells > 2 * ghost);
        let face_widths: Vec<Real> = faces.windows(2).map(|w| w[1] - w[0]).collect();
        Self {
            faces,
            face_widths,
            centers: vec![0.0; n_cells],
            center_spacings: vec![0.0; (n_cells - 1).max(1)],
            ghost,
        }
    }

    /// Total cell count, ghosts included.
    #[inline]
    pub(crate) fn n_cells(&self) -> usize {
        self.face_widths.len()
    }

    /// Active cell count.
    #[inline]
    pub(crate) fn n_active(&self) -> usize {
        self.n_cells() - 2 * self.ghost
    }
}

/// A block of the structured mesh.
///
/// Owns the raw face-position arrays along all three axes plus the derived
/// volume-center/spacing arrays. Build one with [`MeshBlock::builder`], then
/// construct a coordinate system for it, which fills in the derived arrays:
///
/// ```
/// use fvgeom_rs::coordinates::{CoordinateSystem, MinkowskiCartesian};
/// use fvgeom_rs::mesh::MeshBlock;
/// use fvgeom_rs::types::Axis;
///
/// let mut block = MeshBlock::builder()
///     .x1(0.0, 1.0, 4)
///     .build()
///     .unwrap();
/// let coords = MinkowskiCartesian::new(&mut block);
/// assert_eq!(coords.block().center(Axis::X1, 0), 0.125);
/// ```
#[derive(Clone, Debug)]
pub struct MeshBlock {
    pub(crate) x1: AxisGrid,
    pub(crate) x2: AxisGrid,
    pub(crate) x3: AxisGrid,
    extents: Extents,
    ghost: usize,
}

impl MeshBlock {
    pub(crate) fn new(x1: AxisGrid, x2: AxisGrid, x3: AxisGrid, ghost: usize) -> Self {
        let extents = Extents::new(x1.n_active(), x2.n_active(), x3.n_active());
        Self { x1, x2, x3, extents, ghost }
    }

    /// Start building a block.
    pub fn builder() -> super::MeshBlockBuilder {
        super::MeshBlockBuilder::new()
    }

    #[inline]
    pub(crate) fn axis(&self, axis: Axis) -> &AxisGrid {
        match axis {
            Axis::X1 => &self.x1,
            Axis::X2 => &self.x2,
            Axis::X3 => &self.x3,
        }
    }

    #[inline]
    fn axis_mut(&mut self, axis: Axis) -> &mut AxisGrid {
        match axis {
            Axis::X1 => &mut self.x1,
            Axis::X2 => &mut self.x2,
            Axis::X3 => &mut self.x3,
        }
    }

    /// Active cell counts.
    #[inline]
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Ghost cells on each side of every extended axis.
    #[inline]
    pub fn ghost_width(&self) -> usize {
        self.ghost
    }

    /// Total cell count along an axis, ghosts included.
    #[inline]
    pub fn n_cells(&self, axis: Axis) -> usize {
        self.axis(axis).n_cells()
    }

    /// Inclusive index range of the active (non-ghost) cells along an axis.
    ///
    /// For a degenerate axis this is `0..=0`.
    #[inline]
    pub fn active_range(&self, axis: Axis) -> RangeInclusive<usize> {
        let grid = self.axis(axis);
        grid.ghost..=grid.n_cells() - 1 - grid.ghost
    }

    /// Face position `i` along an axis (faces `0..=n_cells`).
    #[inline]
    pub fn face(&self, axis: Axis, i: usize) -> Real {
        self.axis(axis).faces[i]
    }

    /// Width of cell `i` along an axis: `face(i+1) - face(i)`.
    #[inline]
    pub fn face_width(&self, axis: Axis, i: usize) -> Real {
        self.axis(axis).face_widths[i]
    }

    /// Volume-center position of cell `i` along an axis.
    ///
    /// Zero until a coordinate system has been constructed for this block.
    #[inline]
    pub fn center(&self, axis: Axis, i: usize) -> Real {
        self.axis(axis).centers[i]
    }

    /// Spacing between the centers of cells `i` and `i+1` along an axis.
    ///
    /// For a degenerate axis the single entry holds the face-to-face width.
    /// Zero until a coordinate system has been constructed for this block.
    #[inline]
    pub fn center_spacing(&self, axis: Axis, i: usize) -> Real {
        self.axis(axis).center_spacings[i]
    }

    /// All face positions along an axis.
    #[inline]
    pub fn faces(&self, axis: Axis) -> &[Real] {
        &self.axis(axis).faces
    }

    /// All volume-center positions along an axis.
    #[inline]
    pub fn centers(&self, axis: Axis) -> &[Real] {
        &self.axis(axis).centers
    }

    /// All center-to-center spacings along an axis.
    #[inline]
    pub fn center_spacings(&self, axis: Axis) -> &[Real] {
        &self.axis(axis).center_spacings
    }

    /// Write the volume-center position of cell `i`.
    ///
    /// Called exactly once per cell by coordinate-system construction.
    #[inline]
    pub fn set_center(&mut self, axis: Axis, i: usize, value: Real) {
        self.axis_mut(axis).centers[i] = value;
    }

    /// Write the center-to-center spacing at interior gap `i`.
    ///
    /// Called exactly once per gap by coordinate-system construction.
    #[inline]
    pub fn set_center_spacing(&mut self, axis: Axis, i: usize, value: Real) {
        self.axis_mut(axis).center_spacings[i] = value;
    }
}
