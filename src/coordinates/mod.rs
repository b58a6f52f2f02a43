//! Coordinate systems: the geometry contract between mesh and integrator.
//!
//! A coordinate system is constructed once per [`MeshBlock`], derives the
//! block's cell-center positions and spacings, and then answers the
//! per-row geometry queries (interface areas, cell volumes, and metric
//! source terms) that the flux integrator combines with fluxes to form
//! conservative updates. The [`CoordinateSystem`] trait is the single seam
//! through which every metric (Cartesian, cylindrical, spherical, curved
//! spacetime) plugs into the integrator; [`MinkowskiCartesian`] is the flat
//! instance.
//!
//! # Submodules
//!
//! - [`minkowski_cartesian`]: flat Minkowski line element, Cartesian space
//!   sections; all curvature source terms vanish

pub mod minkowski_cartesian;

use std::str::FromStr;

use thiserror::Error;

use crate::mesh::MeshBlock;
use crate::types::Real;

pub use minkowski_cartesian::MinkowskiCartesian;

/// Per-block geometry provider.
///
/// Implementations are constructed from a `&mut MeshBlock` (writing the
/// block's volume-center and spacing arrays exactly once) and afterwards
/// hold a shared reference for the queries below, so a coordinate system
/// can never outlive its block.
///
/// # Indexing contract
///
/// All query operations take a fixed transverse pair `(k, j)` (cell indices
/// along x3 and x2) and an inclusive range `[il, iu]` along x1, and write
/// results into the caller's buffer at the *absolute* positions
/// `out[il..=iu]`. Indices must lie within the block's ghost-extended
/// range and the buffer must extend past `iu`; this is a caller contract
/// checked only by `debug_assert!`, never silently clamped.
pub trait CoordinateSystem {
    /// The block this coordinate system was built for.
    fn block(&self) -> &MeshBlock;

    /// Areas of the cell interfaces orthogonal to x1, written to
    /// `areas[il..=iu]`.
    ///
    /// Areas may depend on `(k, j)` and, for non-Cartesian metrics, vary
    /// with `i`; a flat metric's i-independence is an optimization of that
    /// metric, not part of this contract.
    fn face_area_x1(&self, k: usize, j: usize, il: usize, iu: usize, areas: &mut [Real]);

    /// Areas of the cell interfaces orthogonal to x2, written to
    /// `areas[il..=iu]`.
    fn face_area_x2(&self, k: usize, j: usize, il: usize, iu: usize, areas: &mut [Real]);

    /// Areas of the cell interfaces orthogonal to x3, written to
    /// `areas[il..=iu]`.
    fn face_area_x3(&self, k: usize, j: usize, il: usize, iu: usize, areas: &mut [Real]);

    /// Cell volumes, written to `volumes[il..=iu]`.
    fn cell_volume(&self, k: usize, j: usize, il: usize, iu: usize, volumes: &mut [Real]);

    /// Accumulate the source terms induced purely by the coordinate
    /// system's curvature (centrifugal-like terms, metric-connection terms)
    /// for one `(k, j)` row of primitive variables.
    ///
    /// `sources` must be zero-initialized by the caller; implementations
    /// only *add* their contributions. A flat metric adds nothing and must
    /// leave `sources` untouched; it must not re-zero it, so that a
    /// caller-side initialization bug is not masked.
    fn coordinate_source_terms(&self, k: usize, j: usize, prim: &[Real], sources: &mut [Real]);
}

/// Coordinate-system selection, decided at block-construction time.
///
/// Runtime configuration names the variant (e.g. from an input deck); the
/// integrator then only ever sees the [`CoordinateSystem`] trait.
///
/// # Example
///
/// ```
/// use fvgeom_rs::coordinates::{CoordinateKind, CoordinateSystem};
/// use fvgeom_rs::mesh::MeshBlock;
///
/// let kind: CoordinateKind = "minkowski_cartesian".parse().unwrap();
/// let mut block = MeshBlock::builder().x1(0.0, 1.0, 8).build().unwrap();
/// let coords = kind.build(&mut block);
/// let mut volumes = vec![0.0; 8];
/// coords.cell_volume(0, 0, 0, 7, &mut volumes);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CoordinateKind {
    /// Flat Minkowski line element, Cartesian space sections.
    MinkowskiCartesian,
}

impl CoordinateKind {
    /// Construct the selected coordinate system for a block, deriving the
    /// block's volume-center and spacing arrays.
    pub fn build<'a>(self, block: &'a mut MeshBlock) -> Box<dyn CoordinateSystem + 'a> {
        match self {
            CoordinateKind::MinkowskiCartesian => Box::new(MinkowskiCartesian::new(block)),
        }
    }

    /// Configuration name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            CoordinateKind::MinkowskiCartesian => "minkowski_cartesian",
        }
    }
}

/// Error type for parsing a coordinate-system name.
#[derive(Debug, Error)]
#[error("unknown coordinate system: {0:?}")]
pub struct ParseCoordinateKindError(String);

impl FromStr for CoordinateKind {
    type Err = ParseCoordinateKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minkowski_cartesian" | "cartesian" => Ok(CoordinateKind::MinkowskiCartesian),
            other => Err(ParseCoordinateKindError(other.to_string())),
        }
    }
}
