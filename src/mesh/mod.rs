//! Block-structured mesh representation.
//!
//! A [`MeshBlock`] owns the per-axis face-position arrays plus the derived
//! cell-center/spacing arrays that a coordinate system fills in at
//! construction. Blocks are assembled with the validating
//! [`MeshBlockBuilder`].

mod block;
mod builder;

pub use block::MeshBlock;
pub use builder::{MeshBlockBuilder, MeshError};
