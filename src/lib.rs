//! # fvgeom-rs
//!
//! Geometry provider for block-structured finite-volume meshes.
//!
//! Given a mesh block's raw face-position arrays, this crate derives the
//! geometric quantities a conservative flux integrator needs:
//! - Cell-center (volume-averaged) positions and center-to-center spacings
//! - Interface areas orthogonal to each axis
//! - Cell volumes
//! - Source terms induced by the coordinate system's curvature
//!
//! The [`coordinates::CoordinateSystem`] trait is the seam between the mesh
//! and the integrator: every metric (Cartesian, cylindrical, spherical,
//! curved spacetime) implements the same six operations, and the variant is
//! picked at block-construction time via [`coordinates::CoordinateKind`].
//! The crate ships the flat instance,
//! [`coordinates::MinkowskiCartesian`], whose areas and volumes are plain
//! products of face widths and whose curvature source terms vanish.
//!
//! Areas and volumes feed directly into conservation accounting, so they
//! are exact to machine precision and the hot-path queries are
//! allocation-free: results go into caller buffers or into scratch rows
//! sized once per block.
//!
//! # Example
//!
//! ```
//! use fvgeom_rs::coordinates::{CoordinateSystem, MinkowskiCartesian};
//! use fvgeom_rs::mesh::MeshBlock;
//!
//! let mut block = MeshBlock::builder()
//!     .x1(0.0, 1.5, 3)
//!     .x2(0.0, 2.0, 1)
//!     .build()
//!     .unwrap();
//! let coords = MinkowskiCartesian::new(&mut block);
//!
//! // One (k, j) row of x1-interface areas and cell volumes.
//! let mut areas = vec![0.0; 3];
//! let mut volumes = vec![0.0; 3];
//! coords.face_area_x1(0, 0, 0, 2, &mut areas);
//! coords.cell_volume(0, 0, 0, 2, &mut volumes);
//! assert_eq!(areas, vec![2.0, 2.0, 2.0]);
//! assert_eq!(volumes, vec![1.0, 1.0, 1.0]);
//! ```

pub mod coordinates;
pub mod mesh;
pub mod types;

pub use coordinates::{CoordinateKind, CoordinateSystem, MinkowskiCartesian};
pub use mesh::{MeshBlock, MeshBlockBuilder, MeshError};
pub use types::{Axis, Extents, Real};
