//! Hyperbolic Mathematics Library
//!
//! This crate provides the Lorentz group operators used to move a camera
//! through the hyperboloid model of hyperbolic 3-space.
//!
//! ## Core Types
//!
//! - [`Vec4`] - Minkowski 4-vector with t, x, y, z components
//! - [`Vec3`] - Spatial direction at the origin
//! - [`Mat4`] - 4x4 double precision matrix (column-major)
//!
//! ## Operators
//!
//! - [`lorentz::axis_rotation`] - Rotation about a coordinate axis
//! - [`lorentz::translation`] - Hyperbolic translation (boost)
//! - [`lorentz::orthonormalize`] - Remove floating-point drift from an isometry

mod vec3;
mod vec4;
pub mod mat4;
pub mod lorentz;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
pub use lorentz::Axis;
