//! 3x3 rotation matrices derived from quaternions.
//!
//! A [`RotationMatrix3`] is the matrix form of a unit [`Quaternion`]. It is computed on
//! demand with [`Quaternion::rotation_matrix`] and is never stored alongside the
//! quaternion. Matrices are active: `q.rotation_matrix() * v` equals
//! `v.quaternion_rotate(&q)` for unit `q`.
//!
//! ```
//! use spatial_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let m = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2).rotation_matrix();
//! let v = m * Vector3::x_axis();
//! assert!((v - Vector3::y_axis()).magnitude() < 1e-14);
//! ```
//!
//! Elements are row-major. Each row is a [`Vector3`], so applying the matrix is three
//! dot products and the orthonormality check works on rows directly.

use super::{Quaternion, Vector3};
use std::fmt;

/// A 3x3 row-major rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Wraps a row-major array. Nothing checks that it is a rotation; see
    /// [`is_rotation_matrix`](Self::is_rotation_matrix).
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Same as [`Quaternion::rotation_matrix`].
    pub fn from_quaternion(q: &Quaternion) -> Self {
        q.rotation_matrix()
    }

    /// Same as [`Quaternion::from_rotation_matrix`].
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_rotation_matrix(self)
    }

    /// Element at `row`, `col`. Panics if either is 3 or more.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    pub fn row(&self, r: usize) -> Vector3 {
        Vector3::from_array(self.elements[r])
    }

    /// Column `c`: where the matrix sends the `c`-th basis vector.
    pub fn column(&self, c: usize) -> Vector3 {
        Vector3::new(self.elements[0][c], self.elements[1][c], self.elements[2][c])
    }

    /// Rotates `v`.
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        Vector3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// The rotation that applies `self` first, then `next`.
    ///
    /// ```
    /// use spatial_core::{Quaternion, Vector3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let about_z = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2).rotation_matrix();
    /// let about_x = Quaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2).rotation_matrix();
    /// let v = about_z.then(&about_x) * Vector3::x_axis();
    /// assert!((v - Vector3::z_axis()).magnitude() < 1e-14);
    /// ```
    pub fn then(&self, next: &Self) -> Self {
        let columns = [self.column(0), self.column(1), self.column(2)];
        let mut out = [[0.0; 3]; 3];
        for (c, column) in columns.iter().enumerate() {
            let moved = next.apply(column);
            out[0][c] = moved.x;
            out[1][c] = moved.y;
            out[2][c] = moved.z;
        }
        Self::from_array(out)
    }

    /// Whether the rows are orthonormal and right-handed within `tolerance`.
    ///
    /// A matrix built from a non-unit quaternion fails this check.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));

        let unit_rows = [r0, r1, r2]
            .iter()
            .all(|r| (r.magnitude_squared() - 1.0).abs() <= tolerance);
        let orthogonal = [r0.dot(&r1), r0.dot(&r2), r1.dot(&r2)]
            .iter()
            .all(|d| d.abs() <= tolerance);
        let right_handed = (r0.dot(&r1.cross(&r2)) - 1.0).abs() <= tolerance;

        unit_rows && orthogonal && right_handed
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 3]; 3]> for RotationMatrix3 {
    fn from(elements: [[f64; 3]; 3]) -> Self {
        Self::from_array(elements)
    }
}

/// `b * a` applies `a` first, matching matrix products.
impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        rhs.then(&self)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(&v)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(&v)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r0, r1, r2] = self.elements;
        write!(f, "RotationMatrix3[{:?}, {:?}, {:?}]", r0, r1, r2)
    }
}
