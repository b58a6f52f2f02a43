//! Builder for mesh blocks.
//!
//! Provides a fluent API for assembling a block from per-axis extents,
//! either uniform or from explicit face positions.
//!
//! # Example
//!
//! ```
//! use fvgeom_rs::mesh::MeshBlock;
//! use fvgeom_rs::types::Axis;
//!
//! // 2D block, 64 x 32 active cells, 2 ghost cells per side.
//! let block = MeshBlock::builder()
//!     .ghost(2)
//!     .x1(0.0, 100.0, 64)
//!     .x2(0.0, 50.0, 32)
//!     .build()
//!     .unwrap();
//! assert_eq!(block.n_cells(Axis::X1), 68);
//!
//! // Non-uniform active faces along x1; ghost faces are extended outward
//! // with the end spacings.
//! let block = MeshBlock::builder()
//!     .ghost(1)
//!     .x1_faces(vec![0.0, 0.25, 0.5, 1.0])
//!     .build()
//!     .unwrap();
//! assert_eq!(block.face(Axis::X1, 0), -0.25);
//! assert_eq!(block.face(Axis::X1, 5), 1.5);
//! ```

use thiserror::Error;

use super::block::{AxisGrid, MeshBlock};
use crate::types::{Axis, Real};

/// Error type for mesh-block construction.
#[derive(Debug, Error)]
pub enum MeshError {
    /// An axis was given zero cells or fewer than two face positions.
    #[error("axis {axis} has no cells")]
    EmptyAxis { axis: Axis },

    /// An axis interval has non-positive length.
    #[error("axis {axis}: max ({max}) must be greater than min ({min})")]
    EmptyInterval { axis: Axis, min: Real, max: Real },

    /// Face positions are not strictly increasing.
    #[error("axis {axis}: face positions must be strictly increasing (violated at index {index})")]
    NonMonotonicFaces { axis: Axis, index: usize },

    /// A degenerate axis precedes an extended one.
    #[error("axis {axis} is extended but an earlier axis is degenerate")]
    DegenerateAxisOrder { axis: Axis },
}

/// Per-axis extent specification.
#[derive(Clone, Debug)]
enum AxisSpec {
    /// Single cell spanning `[-0.5, 0.5]`; no ghosts.
    Degenerate,
    /// Uniformly spaced cells over `[min, max]`.
    Uniform { min: Real, max: Real, cells: usize },
    /// Explicit active face positions; ghost faces extrapolated with the
    /// end spacings.
    Faces(Vec<Real>),
}

/// Builder for [`MeshBlock`].
///
/// Axes left unspecified default to a single degenerate cell over
/// `[-0.5, 0.5]`, so a 1D block only needs `x1` and a 2D block `x1` and
/// `x2`. The ghost width applies to every extended axis; degenerate axes
/// never carry ghosts.
#[derive(Clone, Debug)]
pub struct MeshBlockBuilder {
    ghost: usize,
    specs: [AxisSpec; 3],
}

impl Default for MeshBlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBlockBuilder {
    /// Create a builder with no ghost cells and all axes degenerate.
    pub fn new() -> Self {
        Self {
            ghost: 0,
            specs: [AxisSpec::Degenerate, AxisSpec::Degenerate, AxisSpec::Degenerate],
        }
    }

    /// Set the ghost-cell width (per side, every extended axis).
    pub fn ghost(mut self, ghost: usize) -> Self {
        self.ghost = ghost;
        self
    }

    /// Uniform x1 axis: `cells` cells over `[min, max]`.
    pub fn x1(mut self, min: Real, max: Real, cells: usize) -> Self {
        self.specs[0] = AxisSpec::Uniform { min, max, cells };
        self
    }

    /// Uniform x2 axis.
    pub fn x2(mut self, min: Real, max: Real, cells: usize) -> Self {
        self.specs[1] = AxisSpec::Uniform { min, max, cells };
        self
    }

    /// Uniform x3 axis.
    pub fn x3(mut self, min: Real, max: Real, cells: usize) -> Self {
        self.specs[2] = AxisSpec::Uniform { min, max, cells };
        self
    }

    /// Explicit active face positions along x1 (length = cells + 1).
    pub fn x1_faces(mut self, faces: Vec<Real>) -> Self {
        self.specs[0] = AxisSpec::Faces(faces);
        self
    }

    /// Explicit active face positions along x2.
    pub fn x2_faces(mut self, faces: Vec<Real>) -> Self {
        self.specs[1] = AxisSpec::Faces(faces);
        self
    }

    /// Explicit active face positions along x3.
    pub fn x3_faces(mut self, faces: Vec<Real>) -> Self {
        self.specs[2] = AxisSpec::Faces(faces);
        self
    }

    /// Validate the specification and build the block.
    pub fn build(self) -> Result<MeshBlock, MeshError> {
        // A degenerate axis must not precede an extended one.
        let active: Vec<usize> = Axis::ALL
            .iter()
            .map(|&axis| self.active_cells(axis))
            .collect();
        for (i, &axis) in Axis::ALL.iter().enumerate() {
            if active[i] > 1 && active[..i].iter().any(|&n| n <= 1) {
                return Err(MeshError::DegenerateAxisOrder { axis });
            }
        }

        let ghost = self.ghost;
        let [s1, s2, s3] = self.specs;
        let x1 = Self::build_axis(Axis::X1, s1, ghost)?;
        let x2 = Self::build_axis(Axis::X2, s2, ghost)?;
        let x3 = Self::build_axis(Axis::X3, s3, ghost)?;
        Ok(MeshBlock::new(x1, x2, x3, ghost))
    }

    fn active_cells(&self, axis: Axis) -> usize {
        match &self.specs[axis.index()] {
            AxisSpec::Degenerate => 1,
            AxisSpec::Uniform { cells, .. } => *cells,
            AxisSpec::Faces(faces) => faces.len().saturating_sub(1),
        }
    }

    fn build_axis(axis: Axis, spec: AxisSpec, ghost: usize) -> Result<AxisGrid, MeshError> {
        let faces = match spec {
            AxisSpec::Degenerate => return Ok(AxisGrid::new(vec![-0.5, 0.5], 0)),
            AxisSpec::Uniform { min, max, cells } => {
                if cells == 0 {
                    return Err(MeshError::EmptyAxis { axis });
                }
                if max <= min {
                    return Err(MeshError::EmptyInterval { axis, min, max });
                }
                if cells == 1 {
                    return Ok(AxisGrid::new(vec![min, max], 0));
                }
                let dx = (max - min) / cells as Real;
                let total = cells + 2 * ghost;
                (0..=total)
                    .map(|i| min + (i as Real - ghost as Real) * dx)
                    .collect()
            }
            AxisSpec::Faces(active_faces) => {
                if active_faces.len() < 2 {
                    return Err(MeshError::EmptyAxis { axis });
                }
                if let Some(i) = active_faces.windows(2).position(|w| w[1] <= w[0]) {
                    return Err(MeshError::NonMonotonicFaces { axis, index: i });
                }
                if active_faces.len() == 2 {
                    return Ok(AxisGrid::new(active_faces, 0));
                }
                let n = active_faces.len();
                let dx_lo = active_faces[1] - active_faces[0];
                let dx_hi = active_faces[n - 1] - active_faces[n - 2];
                let mut faces = Vec::with_capacity(n + 2 * ghost);
                for g in (1..=ghost).rev() {
                    faces.push(active_faces[0] - g as Real * dx_lo);
                }
                faces.extend_from_slice(&active_faces);
                for g in 1..=ghost {
                    faces.push(active_faces[n - 1] + g as Real * dx_hi);
                }
                faces
            }
        };
        Ok(AxisGrid::new(faces, ghost))
    }
}
