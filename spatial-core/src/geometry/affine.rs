//! 3x4 affine transforms: a linear 3x3 block plus a translation column.
//!
//! [`Vector3::transform`] takes an [`AffineTransform3`]. The translation column is
//! optional at construction time and defaults to zero, so a plain 3x3 matrix and a
//! 3x4 matrix with a trailing translation column are both accepted:
//!
//! ```
//! use spatial_core::{AffineTransform3, Vector3};
//!
//! let scale: AffineTransform3 = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]].into();
//! let scale_then_shift: AffineTransform3 = [
//!     [2.0, 0.0, 0.0, 1.0],
//!     [0.0, 2.0, 0.0, 1.0],
//!     [0.0, 0.0, 2.0, 1.0],
//! ]
//! .into();
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! assert_eq!(v.transform(&scale), Vector3::new(2.0, 4.0, 6.0));
//! assert_eq!(v.transform(&scale_then_shift), Vector3::new(3.0, 5.0, 7.0));
//! ```
//!
//! Row `r` of the result is `Σ_c v[c] · linear[r][c] + translation[r]`.

use super::{RotationMatrix3, Vector3};

/// A linear map followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform3 {
    /// Row-major 3x3 linear part.
    pub linear: [[f64; 3]; 3],
    pub translation: [f64; 3],
}

impl AffineTransform3 {
    pub fn new(linear: [[f64; 3]; 3], translation: [f64; 3]) -> Self {
        Self {
            linear,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self::from_linear(*RotationMatrix3::identity().elements())
    }

    /// Linear part only; the translation is zero.
    pub fn from_linear(linear: [[f64; 3]; 3]) -> Self {
        Self::new(linear, [0.0; 3])
    }

    /// Pure translation by `offset`.
    pub fn translation(offset: Vector3) -> Self {
        Self::new(*RotationMatrix3::identity().elements(), offset.to_array())
    }

    /// Builds from three rows of four; the fourth column is the translation.
    pub fn from_rows(rows: [[f64; 4]; 3]) -> Self {
        let mut linear = [[0.0; 3]; 3];
        let mut translation = [0.0; 3];

        for (r, row) in rows.iter().enumerate() {
            linear[r].copy_from_slice(&row[..3]);
            translation[r] = row[3];
        }

        Self::new(linear, translation)
    }

    /// Applies the linear part, then adds the translation.
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let input = v.to_array();
        let mut out = self.translation;

        for (r, cell) in out.iter_mut().enumerate() {
            for (c, component) in input.iter().enumerate() {
                *cell += component * self.linear[r][c];
            }
        }

        Vector3::from_array(out)
    }
}

impl Default for AffineTransform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 3]; 3]> for AffineTransform3 {
    fn from(linear: [[f64; 3]; 3]) -> Self {
        Self::from_linear(linear)
    }
}

impl From<[[f64; 4]; 3]> for AffineTransform3 {
    fn from(rows: [[f64; 4]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<RotationMatrix3> for AffineTransform3 {
    fn from(m: RotationMatrix3) -> Self {
        Self::from_linear(*m.elements())
    }
}
