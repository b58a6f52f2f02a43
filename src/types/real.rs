//! Floating-point precision shared by the whole crate.
//!
//! Every geometric array (face positions, centers, spacings, areas, volumes)
//! uses this one type so the mesh and its consumers agree bit-for-bit on
//! precision. The default is `f64`; enabling the `f32` cargo feature switches
//! the entire crate to single precision.

/// Scalar type for all geometric quantities.
#[cfg(not(feature = "f32"))]
pub type Real = f64;

/// Scalar type for all geometric quantities.
#[cfg(feature = "f32")]
pub type Real = f32;
