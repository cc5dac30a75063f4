//! 3D vectors and quaternions for orientation and position math.
//!
//! `spatial-core` provides two value types, [`Vector3`] and [`Quaternion`], with the
//! arithmetic, normalization, rotation, and projection operations used by graphics,
//! robotics, and simulation code. It is pure Rust with no global state: every operation
//! is a function of its inputs and returns a new value.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`geometry`] | [`Vector3`], [`Quaternion`], [`RotationMatrix3`], [`AffineTransform3`] |
//! | [`errors`] | [`GeometryError`] and [`GeometryResult`] |
//! | [`constants`] | Angle constants and the default comparison tolerance |
//!
//! # Rotating a Vector
//!
//! ```
//! use spatial_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // Axis-angle, straight on the vector
//! let v = Vector3::new(1.0, 0.0, 0.0).rotate_z(FRAC_PI_2);
//! assert!((v - Vector3::new(0.0, 1.0, 0.0)).magnitude() < 1e-14);
//!
//! // Same rotation, through an explicit quaternion and its matrix
//! let q = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
//! let m = q.rotation_matrix();
//! assert!((m * Vector3::x_axis() - v).magnitude() < 1e-14);
//! ```
//!
//! # Projections
//!
//! ```
//! use spatial_core::Vector3;
//!
//! let p = Vector3::new(2.0, 3.0, 5.0);
//! let on_floor = p.planar_project(&Vector3::zeros(), &Vector3::z_axis());
//! assert!((on_floor - Vector3::new(2.0, 3.0, 0.0)).magnitude() < 1e-14);
//!
//! let d = p.distance_from_line(&Vector3::zeros(), &Vector3::z_axis());
//! assert!((d - 13.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! # Design Notes
//!
//! - **Radians everywhere**: every angle argument and result is in radians.
//!
//! - **Zero magnitude**: vector operations degrade quietly (a zero vector normalizes to
//!   itself, the angle to a zero vector is 0). Quaternion division and normalization
//!   return [`MathErrorKind::DivisionByZero`] instead.
//!
//! - **Logging**: failures and degenerate fallbacks are reported through `tracing` at
//!   `debug`/`trace` level. The crate never installs a subscriber.
//!
//! - **Features**: `serde` derives `Serialize`/`Deserialize` for all value types.

pub mod constants;
pub mod errors;
pub mod geometry;

pub use errors::{GeometryError, GeometryResult, MathErrorKind};
pub use geometry::{
    AffineTransform3, Quaternion, QuaternionRecord, RotationMatrix3, Vector3, VectorRecord,
};

pub mod test_helpers;
