//! Error types for vector and quaternion operations.
//!
//! This module provides a unified error type [`GeometryError`] for the few
//! operations in this crate that can fail: constructors fed too few components,
//! and quaternion division or normalization by a zero magnitude.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MissingArgument`](GeometryError::MissingArgument) | `from_slice` given an `x` without `y`, or an `a` without all of `i, j, k` |
//! | [`MathError`](GeometryError::MathError) | Division by zero, surplus slice components |
//!
//! # Zero Magnitude Policy
//!
//! Vector operations never fail on a zero vector. [`Vector3::normalize`](crate::Vector3::normalize)
//! returns the zero vector and [`Vector3::angle_between`](crate::Vector3::angle_between)
//! returns 0. Quaternion division and normalization report
//! [`MathErrorKind::DivisionByZero`] instead, because a quaternion used as a
//! rotation must be unit length and there is no meaningful fallback.
//!
//! ```
//! use spatial_core::{GeometryError, MathErrorKind, Quaternion};
//!
//! let err = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize().unwrap_err();
//! assert!(err.is_division_by_zero());
//! assert!(matches!(
//!     err,
//!     GeometryError::MathError { kind: MathErrorKind::DivisionByZero, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`GeometryError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Attempted division by an exact zero.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
}

/// Unified error type for geometry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A constructor received some components but not all required ones.
    #[error("Missing argument for {constructor}: {missing}")]
    MissingArgument { constructor: String, missing: String },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;

impl GeometryError {
    /// Creates a [`MissingArgument`](Self::MissingArgument) error.
    pub fn missing_argument(constructor: &str, missing: &str) -> Self {
        Self::MissingArgument {
            constructor: constructor.to_string(),
            missing: missing.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) of kind [`MathErrorKind::DivisionByZero`].
    pub fn division_by_zero(operation: &str, reason: &str) -> Self {
        tracing::debug!(operation, reason, "division by zero");
        Self::math_error(operation, MathErrorKind::DivisionByZero, reason)
    }

    /// Returns `true` for [`MissingArgument`](Self::MissingArgument).
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }

    /// Returns `true` for a [`MathError`](Self::MathError) caused by a zero divisor.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            Self::MathError {
                kind: MathErrorKind::DivisionByZero,
                ..
            }
        )
    }
}
