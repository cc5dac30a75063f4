//! Vector, quaternion, and matrix value types.
//!
//! - [`Vector3`]: 3D point or direction
//! - [`Quaternion`]: rotation (or free quaternion)
//! - [`RotationMatrix3`]: 3x3 matrix form of a unit quaternion
//! - [`AffineTransform3`]: 3x3 linear part plus translation, for [`Vector3::transform`]

mod affine;
mod quaternion;
mod rotation_matrix;
mod vector3;

pub use affine::AffineTransform3;
pub use quaternion::{Quaternion, QuaternionRecord};
pub use rotation_matrix::RotationMatrix3;
pub use vector3::{Vector3, VectorRecord};
