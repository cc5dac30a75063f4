//! Quaternions for 3D rotation.
//!
//! A [`Quaternion`] `(a, i, j, k)` has a scalar part `a` and an imaginary part
//! `(i, j, k)`. Unit quaternions represent rotations; the type itself does not track
//! whether it is unit length, so normalize before treating a value as a rotation.
//!
//! # Building Rotations
//!
//! ```
//! use spatial_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
//! let v = Vector3::x_axis().quaternion_rotate(&q);
//! assert!((v - Vector3::y_axis()).magnitude() < 1e-14);
//! ```
//!
//! # Composition
//!
//! [`multiply`](Quaternion::multiply) is the Hamilton product and is not commutative.
//! [`rotate`](Quaternion::rotate) composes rotations: `p.rotate(&q)` is the rotation
//! `p` followed by `q`, i.e. `q̂ · p̂`.
//!
//! ```
//! use spatial_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let quarter_z = Quaternion::identity().rotate_z(FRAC_PI_2)?;
//! let half_z = quarter_z.rotate_z(FRAC_PI_2)?;
//! let v = Vector3::x_axis().quaternion_rotate(&half_z);
//! assert!((v - Vector3::new(-1.0, 0.0, 0.0)).magnitude() < 1e-14);
//! # Ok::<(), spatial_core::GeometryError>(())
//! ```
//!
//! # Failure Modes
//!
//! Dividing by zero or normalizing the zero quaternion returns
//! [`DivisionByZero`](crate::MathErrorKind::DivisionByZero). Axis-angle construction
//! never fails: a zero axis falls back the way [`Vector3::normalize`] does.
use super::{RotationMatrix3, Vector3};
use crate::{GeometryError, GeometryResult, MathErrorKind};
use std::fmt;

/// A quaternion `a + i·𝐢 + j·𝐣 + k·𝐤`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar (real) part.
    pub a: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

/// Record form of a quaternion, `{a, i, j, k}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuaternionRecord {
    pub a: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Quaternion {
    /// Creates a quaternion from its scalar part `a` and imaginary parts `i, j, k`.
    #[inline]
    pub fn new(a: f64, i: f64, j: f64, k: f64) -> Self {
        Self { a, i, j, k }
    }

    /// The identity rotation `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion from its `{a, i, j, k}` record.
    pub fn from_record(record: QuaternionRecord) -> Self {
        Self::new(record.a, record.i, record.j, record.k)
    }

    /// Creates a quaternion from a slice of components `[a, i, j, k]`.
    ///
    /// An empty slice gives the identity. A scalar part without all three imaginary
    /// parts is a [`MissingArgument`](GeometryError::MissingArgument) error naming the
    /// absent parts.
    ///
    /// ```
    /// use spatial_core::Quaternion;
    ///
    /// assert_eq!(Quaternion::from_slice(&[]).unwrap(), Quaternion::identity());
    /// let err = Quaternion::from_slice(&[1.0, 0.0]).unwrap_err();
    /// assert!(err.to_string().contains("j, k"));
    /// ```
    pub fn from_slice(components: &[f64]) -> GeometryResult<Self> {
        const NAMES: [&str; 3] = ["i", "j", "k"];

        match *components {
            [] => Ok(Self::identity()),
            [a, i, j, k] => Ok(Self::new(a, i, j, k)),
            _ if components.len() < 4 => Err(GeometryError::missing_argument(
                "Quaternion::from_slice",
                &NAMES[components.len() - 1..].join(", "),
            )),
            _ => Err(GeometryError::math_error(
                "Quaternion::from_slice",
                MathErrorKind::InvalidInput,
                &format!("expected at most 4 components, got {}", components.len()),
            )),
        }
    }

    /// Unit quaternion rotating by `angle` radians about `axis`.
    ///
    /// The axis is normalized first and the result is normalized again to absorb
    /// rounding. A zero axis has no direction: the result is `(cos θ/2, 0, 0, 0)`
    /// rescaled to unit length, i.e. the identity up to sign.
    ///
    /// ```
    /// use spatial_core::{Quaternion, Vector3};
    ///
    /// let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 3.0, 0.0), 0.0);
    /// assert_eq!(q, Quaternion::identity());
    /// ```
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        if axis.magnitude_squared() == 0.0 {
            tracing::trace!(angle, "rotation about a zero axis");
        }
        let unit_axis = axis.normalize();
        let (s, c) = libm::sincos(angle * 0.5);
        let q = Self::new(c, s * unit_axis.x, s * unit_axis.y, s * unit_axis.z);

        let mag = q.magnitude();
        if mag == 0.0 {
            return q;
        }
        Self::new(q.a / mag, q.i / mag, q.j / mag, q.k / mag)
    }

    /// Recovers the unit quaternion of a rotation matrix.
    ///
    /// Picks the branch with the largest diagonal term so the square root argument
    /// stays well away from zero. The sign of the result is chosen by that branch;
    /// `q` and `-q` describe the same rotation.
    pub fn from_rotation_matrix(m: &RotationMatrix3) -> Self {
        let e = m.elements();
        let trace = e[0][0] + e[1][1] + e[2][2];

        let q = if trace > 0.0 {
            let s = 2.0 * libm::sqrt(trace + 1.0);
            Self::new(
                0.25 * s,
                (e[2][1] - e[1][2]) / s,
                (e[0][2] - e[2][0]) / s,
                (e[1][0] - e[0][1]) / s,
            )
        } else if e[0][0] > e[1][1] && e[0][0] > e[2][2] {
            let s = 2.0 * libm::sqrt(1.0 + e[0][0] - e[1][1] - e[2][2]);
            Self::new(
                (e[2][1] - e[1][2]) / s,
                0.25 * s,
                (e[0][1] + e[1][0]) / s,
                (e[0][2] + e[2][0]) / s,
            )
        } else if e[1][1] > e[2][2] {
            let s = 2.0 * libm::sqrt(1.0 + e[1][1] - e[0][0] - e[2][2]);
            Self::new(
                (e[0][2] - e[2][0]) / s,
                (e[0][1] + e[1][0]) / s,
                0.25 * s,
                (e[1][2] + e[2][1]) / s,
            )
        } else {
            let s = 2.0 * libm::sqrt(1.0 + e[2][2] - e[0][0] - e[1][1]);
            Self::new(
                (e[1][0] - e[0][1]) / s,
                (e[0][2] + e[2][0]) / s,
                (e[1][2] + e[2][1]) / s,
                0.25 * s,
            )
        };

        q.scale(1.0 / q.magnitude())
    }

    /// Returns `(a, -i, -j, -k)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.i, -self.j, -self.k)
    }

    /// Multiplies every component by `s`. Same as `self * s`.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.a * s, self.i * s, self.j * s, self.k * s)
    }

    /// Divides every component by `divisor`.
    ///
    /// Fails with [`DivisionByZero`](MathErrorKind::DivisionByZero) when `divisor == 0`.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, divisor: f64) -> GeometryResult<Self> {
        if divisor == 0.0 {
            return Err(GeometryError::division_by_zero(
                "Quaternion::div",
                "divisor is zero",
            ));
        }
        Ok(Self::new(
            self.a / divisor,
            self.i / divisor,
            self.j / divisor,
            self.k / divisor,
        ))
    }

    /// Four-component dot product. `q.dot(&p) < 0` means `p` and `-q` are closer.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.a * other.a + self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Squared 4-norm, `a² + i² + j² + k²`.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean 4-norm.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    /// Scales to unit length.
    ///
    /// ```
    /// use spatial_core::Quaternion;
    ///
    /// let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).normalize()?;
    /// assert_eq!(q, Quaternion::identity());
    /// assert!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize().is_err());
    /// # Ok::<(), spatial_core::GeometryError>(())
    /// ```
    pub fn normalize(&self) -> GeometryResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(GeometryError::division_by_zero(
                "Quaternion::normalize",
                "magnitude is zero",
            ));
        }
        self.div(mag)
    }

    /// Multiplicative inverse, `conj(q) / |q|²`.
    pub fn inverse(&self) -> GeometryResult<Self> {
        let mag_sq = self.magnitude_squared();
        if mag_sq == 0.0 {
            return Err(GeometryError::division_by_zero(
                "Quaternion::inverse",
                "magnitude is zero",
            ));
        }
        self.conjugate().div(mag_sq)
    }

    /// Hamilton product `self * other`.
    ///
    /// ```
    /// use spatial_core::Quaternion;
    ///
    /// let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    /// let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    /// assert_eq!(i.multiply(&j), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    /// assert_eq!(j.multiply(&i), Quaternion::new(0.0, 0.0, 0.0, -1.0));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (a1, i1, j1, k1) = (self.a, self.i, self.j, self.k);
        let (a2, i2, j2, k2) = (other.a, other.i, other.j, other.k);

        Self::new(
            a1 * a2 - i1 * i2 - j1 * j2 - k1 * k2,
            a1 * i2 + i1 * a2 + j1 * k2 - k1 * j2,
            a1 * j2 - i1 * k2 + j1 * a2 + k1 * i2,
            a1 * k2 + i1 * j2 - j1 * i2 + k1 * a2,
        )
    }

    /// Composes rotations: `self` first, then `q`.
    ///
    /// Both operands are normalized, so the result is `q̂ · self̂`. Either operand
    /// having zero magnitude is a [`DivisionByZero`](MathErrorKind::DivisionByZero)
    /// error.
    pub fn rotate(&self, q: &Self) -> GeometryResult<Self> {
        Ok(q.normalize()?.multiply(&self.normalize()?))
    }

    /// Composes with a rotation of `angle` radians about `axis`.
    pub fn rotate_axis(&self, axis: &Vector3, angle: f64) -> GeometryResult<Self> {
        self.rotate(&Self::from_axis_angle(axis, angle))
    }

    /// Composes with a rotation of `angle` radians about the X axis.
    pub fn rotate_x(&self, angle: f64) -> GeometryResult<Self> {
        self.rotate_axis(&Vector3::x_axis(), angle)
    }

    /// Composes with a rotation of `angle` radians about the Y axis.
    pub fn rotate_y(&self, angle: f64) -> GeometryResult<Self> {
        self.rotate_axis(&Vector3::y_axis(), angle)
    }

    /// Composes with a rotation of `angle` radians about the Z axis.
    pub fn rotate_z(&self, angle: f64) -> GeometryResult<Self> {
        self.rotate_axis(&Vector3::z_axis(), angle)
    }

    /// The 3x3 matrix that rotates vectors the way this quaternion does.
    ///
    /// Assumes `self` is unit length and does not normalize; a non-unit quaternion
    /// yields a scaled, non-orthogonal matrix.
    ///
    /// ```
    /// use spatial_core::{Quaternion, Vector3};
    ///
    /// let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 0.4);
    /// let v = Vector3::new(-1.0, 0.5, 2.0);
    /// let by_matrix = q.rotation_matrix() * v;
    /// assert!((by_matrix - v.quaternion_rotate(&q)).magnitude() < 1e-14);
    /// ```
    pub fn rotation_matrix(&self) -> RotationMatrix3 {
        let (a, i, j, k) = (self.a, self.i, self.j, self.k);

        RotationMatrix3::from_array([
            [
                1.0 - 2.0 * (j * j + k * k),
                2.0 * (i * j - a * k),
                2.0 * (i * k + a * j),
            ],
            [
                2.0 * (i * j + a * k),
                1.0 - 2.0 * (i * i + k * k),
                2.0 * (j * k - a * i),
            ],
            [
                2.0 * (i * k - a * j),
                2.0 * (j * k + a * i),
                1.0 - 2.0 * (i * i + j * j),
            ],
        ])
    }

    /// Returns the components as `[a, i, j, k]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.a, self.i, self.j, self.k]
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<(f64, f64, f64, f64)> for Quaternion {
    fn from((a, i, j, k): (f64, f64, f64, f64)) -> Self {
        Self::new(a, i, j, k)
    }
}

impl From<QuaternionRecord> for Quaternion {
    fn from(record: QuaternionRecord) -> Self {
        Self::from_record(record)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.a + rhs.a,
            self.i + rhs.i,
            self.j + rhs.j,
            self.k + rhs.k,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.a - rhs.a,
            self.i - rhs.i,
            self.j - rhs.j,
            self.k - rhs.k,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.a, -self.i, -self.j, -self.k)
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

/// Hamilton product
impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.9}, {:.9}, {:.9}, {:.9})",
            self.a, self.i, self.j, self.k
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI};
    use crate::test_helpers::{assert_quat_close, assert_vec_close};

    #[test]
    fn test_construction() {
        assert_eq!(Quaternion::default(), Quaternion::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(
            Quaternion::from([1.0, 2.0, 3.0, 4.0]),
            Quaternion::new(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(
            Quaternion::from((1.0, 2.0, 3.0, 4.0)),
            Quaternion::new(1.0, 2.0, 3.0, 4.0)
        );
        let record = QuaternionRecord {
            a: 0.5,
            i: 0.5,
            j: 0.5,
            k: 0.5,
        };
        assert_eq!(Quaternion::from(record), Quaternion::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn test_from_slice_missing_parts() {
        for (len, missing) in [(1, "i, j, k"), (2, "j, k"), (3, "k")] {
            let components = [1.0, 2.0, 3.0][..len].to_vec();
            let err = Quaternion::from_slice(&components).unwrap_err();
            assert!(err.is_missing_argument());
            assert!(
                err.to_string().ends_with(missing),
                "{} components: {}",
                len,
                err
            );
        }
    }

    #[test]
    fn test_from_slice_full_and_surplus() {
        assert_eq!(
            Quaternion::from_slice(&[0.0, 1.0, 0.0, 0.0]).unwrap(),
            Quaternion::new(0.0, 1.0, 0.0, 0.0)
        );
        let err = Quaternion::from_slice(&[0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::MathError {
                kind: MathErrorKind::InvalidInput,
                ..
            }
        ));
    }

    #[test]
    fn test_add_sub_neg_scale() {
        let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q = Quaternion::new(0.5, -1.0, 2.0, 0.0);
        assert_eq!(p + q, Quaternion::new(1.5, 1.0, 5.0, 4.0));
        assert_eq!(p - q, Quaternion::new(0.5, 3.0, 1.0, 4.0));
        assert_eq!(-p, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(p * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(p.scale(2.0), p * 2.0);
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(1.0, 2.0, -3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, 3.0, -4.0));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn test_div() {
        let q = Quaternion::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(q.div(2.0).unwrap(), Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert!(q.div(0.0).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.magnitude(), 2.0);
        assert_eq!(q.normalize().unwrap(), Quaternion::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn test_normalize_zero_fails() {
        let err = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize().unwrap_err();
        assert!(err.is_division_by_zero());
        assert!(err.to_string().contains("Quaternion::normalize"));
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let product = q.multiply(&q.inverse().unwrap());
        assert_quat_close(product, Quaternion::identity(), 1e-15);
        assert!(Quaternion::new(0.0, 0.0, 0.0, 0.0)
            .inverse()
            .unwrap_err()
            .is_division_by_zero());
    }

    #[test]
    fn test_hamilton_product_units() {
        let one = Quaternion::identity();
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(one.multiply(&i), i);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, -one);
        assert_eq!(j * i, -k);
    }

    #[test]
    fn test_hamilton_product_general() {
        let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(p * q, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
        assert_eq!(q * p, Quaternion::new(-60.0, 20.0, 14.0, 32.0));
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 2.0), PI);
        assert_quat_close(q, Quaternion::new(0.0, 0.0, 0.0, 1.0), 1e-15);
        assert!((q.magnitude() - 1.0).abs() < 1e-15);

        let identity = Quaternion::from_axis_angle(&Vector3::new(1.0, -2.0, 0.5), 0.0);
        assert_quat_close(identity, Quaternion::identity(), 1e-15);
    }

    #[test]
    fn test_from_axis_angle_zero_axis() {
        let q = Quaternion::from_axis_angle(&Vector3::zeros(), 1.0);
        assert_quat_close(q, Quaternion::identity(), 1e-15);

        let half_turn = Quaternion::from_axis_angle(&Vector3::zeros(), PI);
        assert_quat_close(half_turn, Quaternion::identity(), 1e-15);
    }

    #[test]
    fn test_rotate_composes_in_order() {
        // Quarter turn about Z, then quarter turn about X.
        let composed = Quaternion::identity()
            .rotate_z(HALF_PI)
            .unwrap()
            .rotate_x(HALF_PI)
            .unwrap();
        let v = Vector3::x_axis().quaternion_rotate(&composed);
        assert_vec_close(v, Vector3::z_axis(), 1e-14);
    }

    #[test]
    fn test_rotate_normalizes_operands() {
        let p = Quaternion::new(3.0, 0.0, 0.0, 0.0);
        let q = Quaternion::from_axis_angle(&Vector3::y_axis(), 0.3).scale(5.0);
        let r = p.rotate(&q).unwrap();
        assert!((r.magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_zero_fails() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert!(zero.rotate(&Quaternion::identity()).is_err());
        assert!(Quaternion::identity().rotate(&zero).is_err());
        assert!(zero.rotate_y(0.5).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_rotation_matrix_identity() {
        let m = Quaternion::identity().rotation_matrix();
        assert_eq!(m, RotationMatrix3::identity());
    }

    #[test]
    fn test_rotation_matrix_quarter_turn_z() {
        let m = Quaternion::from_axis_angle(&Vector3::z_axis(), HALF_PI).rotation_matrix();
        let expected =
            RotationMatrix3::from_array([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        for c in 0..3 {
            assert_vec_close(m.column(c), expected.column(c), 1e-15);
        }
        assert!(m.is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_rotation_matrix_round_trip() {
        for (axis, angle) in [
            (Vector3::new(1.0, 2.0, 3.0), 0.4),
            (Vector3::new(-1.0, 0.0, 0.5), 2.5),
            (Vector3::x_axis(), PI),
            (Vector3::new(0.0, 1.0, 1.0), -3.0),
        ] {
            let q = Quaternion::from_axis_angle(&axis, angle);
            let back = Quaternion::from_rotation_matrix(&q.rotation_matrix());
            // q and -q are the same rotation
            let same = (back - q).magnitude().min((back + q).magnitude());
            assert!(same < 1e-14, "axis {} angle {}: {} vs {}", axis, angle, back, q);
        }
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Quaternion::identity());
        assert_eq!(s, "Quaternion(1.000000000, 0.000000000, 0.000000000, 0.000000000)");
    }
}
