//! Strongly-typed primitives shared across the crate.
//!
//! - [`Real`]: the one floating-point type every geometric array uses
//!   (feature-switchable between `f64` and `f32`)
//! - [`Axis`]: coordinate axis identifier, so axis numbers and cell indices
//!   cannot be mixed up
//! - [`Extents`]: per-axis active cell counts with degenerate-axis queries

mod axis;
mod extents;
mod real;

pub use axis::Axis;
pub use extents::Extents;
pub use real::Real;
