//! 3D Cartesian vectors: arithmetic, rotation, and projection.
//!
//! A [`Vector3`] is a point or a direction in 3D space. It is a `Copy` value type and
//! every operation returns a new vector; nothing mutates the receiver.
//!
//! # Construction
//!
//! There is one constructor per input shape instead of a single overloaded one:
//!
//! ```
//! use spatial_core::{Vector3, VectorRecord};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::from_xy(1.0, 2.0);          // z = 0
//! let c = Vector3::from([1.0, 2.0]);           // z = 0
//! let d = Vector3::from_record(VectorRecord { x: 1.0, y: 2.0, z: None });
//! assert_eq!(b, c);
//! assert_eq!(c, d);
//!
//! // Slices are checked: an x without a y is rejected.
//! assert!(Vector3::from_slice(&[1.0]).is_err());
//! assert_eq!(Vector3::from_slice(&[]).unwrap(), Vector3::zeros());
//! # let _ = a;
//! ```
//!
//! # Rotation
//!
//! Rotations go through quaternions. [`rotate_axis`](Vector3::rotate_axis) builds a unit
//! quaternion from an axis and an angle and applies it with the sandwich product
//! `q · (0, v) · conj(q)`. Positive angles follow the right-hand rule:
//!
//! ```
//! use spatial_core::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Vector3::x_axis().rotate_z(FRAC_PI_2);
//! assert!((v - Vector3::y_axis()).magnitude() < 1e-14);
//! ```
//!
//! # Zero Vectors
//!
//! The zero vector is valid everywhere. [`normalize`](Vector3::normalize) returns it
//! unchanged, [`angle_between`](Vector3::angle_between) reports 0 when either side has
//! zero length, and [`project`](Vector3::project) onto the zero vector yields the zero
//! vector. Rotating about a zero axis is the identity rotation.
use super::{AffineTransform3, Quaternion};
use crate::constants::HALF_PI;
use crate::{GeometryError, GeometryResult, MathErrorKind};
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public for direct access.
///
/// ```
/// use spatial_core::Vector3;
///
/// let v = Vector3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.x, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: f64,
}

/// Record form of a vector where `z` may be absent.
///
/// Mirrors the `{x, y, z?}` shape callers often hold; a missing `z` becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorRecord {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: Option<f64>,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector in the XY plane (`z = 0`).
    #[inline]
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Creates a vector from a record; a missing `z` defaults to 0.
    pub fn from_record(record: VectorRecord) -> Self {
        Self::new(record.x, record.y, record.z.unwrap_or(0.0))
    }

    /// Creates a vector from a slice of up to three components.
    ///
    /// | Length | Result |
    /// |--------|--------|
    /// | 0 | zero vector |
    /// | 1 | [`MissingArgument`](GeometryError::MissingArgument): `y` is required |
    /// | 2 | `(x, y, 0)` |
    /// | 3 | `(x, y, z)` |
    /// | > 3 | [`MathError`](GeometryError::MathError) with [`MathErrorKind::InvalidInput`] |
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// assert_eq!(Vector3::from_slice(&[1.0, 2.0]).unwrap(), Vector3::new(1.0, 2.0, 0.0));
    /// assert!(Vector3::from_slice(&[1.0]).unwrap_err().is_missing_argument());
    /// ```
    pub fn from_slice(components: &[f64]) -> GeometryResult<Self> {
        match *components {
            [] => Ok(Self::zeros()),
            [_] => Err(GeometryError::missing_argument("Vector3::from_slice", "y")),
            [x, y] => Ok(Self::from_xy(x, y)),
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(GeometryError::math_error(
                "Vector3::from_slice",
                MathErrorKind::InvalidInput,
                &format!("expected at most 3 components, got {}", components.len()),
            )),
        }
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the vector has zero length, returns the zero vector unchanged (avoids NaN).
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    /// ```
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    /// Multiplies every component by `s`. Same as `self * s`.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Componentwise product. Same as `self * other`.
    #[inline]
    pub fn mul_components(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector (right-hand rule).
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.cross(&b), Vector3::new(-3.0, 6.0, -3.0));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).magnitude()
    }

    /// Rotates this vector by the rotation `q` represents.
    ///
    /// `q` is normalized first, then the vector is lifted to the pure quaternion
    /// `p = (0, x, y, z)` and the sandwich product `q · p · conj(q)` is taken. The
    /// imaginary part of the result is the rotated vector.
    ///
    /// A zero quaternion has no direction; the result is NaN in every component.
    pub fn quaternion_rotate(&self, q: &Quaternion) -> Self {
        let unit = q.scale(1.0 / q.magnitude());
        let p = Quaternion::new(0.0, self.x, self.y, self.z);
        let r = unit.multiply(&p).multiply(&unit.conjugate());
        Self::new(r.i, r.j, r.k)
    }

    /// Rotates this vector by `angle` radians about `axis`.
    ///
    /// `axis` does not need to be unit length. A zero axis has no direction, so the
    /// rotation is the identity and the vector comes back unchanged.
    ///
    /// ```
    /// use spatial_core::Vector3;
    /// use std::f64::consts::PI;
    ///
    /// let v = Vector3::new(1.0, 0.0, 0.0);
    /// let r = v.rotate_axis(&Vector3::new(0.0, 0.0, 5.0), PI);
    /// assert!((r - Vector3::new(-1.0, 0.0, 0.0)).magnitude() < 1e-14);
    /// ```
    pub fn rotate_axis(&self, axis: &Self, angle: f64) -> Self {
        self.quaternion_rotate(&Quaternion::from_axis_angle(axis, angle))
    }

    /// Rotates about the X axis by `angle` radians.
    pub fn rotate_x(&self, angle: f64) -> Self {
        self.rotate_axis(&Self::x_axis(), angle)
    }

    /// Rotates about the Y axis by `angle` radians.
    pub fn rotate_y(&self, angle: f64) -> Self {
        self.rotate_axis(&Self::y_axis(), angle)
    }

    /// Rotates about the Z axis by `angle` radians.
    pub fn rotate_z(&self, angle: f64) -> Self {
        self.rotate_axis(&Self::z_axis(), angle)
    }

    /// Applies an affine transform: linear part, then translation.
    ///
    /// ```
    /// use spatial_core::{AffineTransform3, Vector3};
    ///
    /// let shift = AffineTransform3::from_rows([
    ///     [1.0, 0.0, 0.0, 10.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, -1.0],
    /// ]);
    /// assert_eq!(Vector3::new(1.0, 2.0, 3.0).transform(&shift), Vector3::new(11.0, 2.0, 2.0));
    /// ```
    pub fn transform(&self, m: &AffineTransform3) -> Self {
        m.apply(self)
    }

    /// Angle between two directions, in radians within `[0, π]`.
    ///
    /// Returns 0 if either vector has zero length. Both operands are first scaled
    /// by their largest component, then the angle is `atan2(|a × b|, a · b)`, so very
    /// large or very small vectors neither overflow nor collapse to zero.
    ///
    /// ```
    /// use spatial_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let a = Vector3::x_axis();
    /// assert_eq!(a.angle_between(&Vector3::y_axis()), FRAC_PI_2);
    /// assert_eq!(a.angle_between(&Vector3::zeros()), 0.0);
    /// ```
    pub fn angle_between(&self, other: &Self) -> f64 {
        match (self.direction_scaled(), other.direction_scaled()) {
            (Some(a), Some(b)) => libm::atan2(a.cross(&b).magnitude(), a.dot(&b)),
            _ => {
                tracing::trace!(lhs = %self, rhs = %other, "angle with zero-length vector");
                0.0
            }
        }
    }

    /// Same direction, largest absolute component 1. `None` for the zero vector.
    fn direction_scaled(&self) -> Option<Self> {
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if largest == 0.0 {
            None
        } else {
            Some(*self / largest)
        }
    }

    /// Projection of `self` onto the direction of `onto`.
    ///
    /// The result points along `onto` with signed length `|self| · cos θ`. Projecting
    /// onto the zero vector gives the zero vector.
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let p = Vector3::new(3.0, 4.0, 0.0).project(&Vector3::new(2.0, 0.0, 0.0));
    /// assert!((p - Vector3::new(3.0, 0.0, 0.0)).magnitude() < 1e-14);
    /// ```
    pub fn project(&self, onto: &Self) -> Self {
        let length = libm::cos(self.angle_between(onto)) * self.magnitude();
        onto.normalize() * length
    }

    /// Projects this point onto the plane through `origin` with normal `normal`.
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let p = Vector3::new(2.0, 3.0, 5.0)
    ///     .planar_project(&Vector3::new(0.0, 0.0, 1.0), &Vector3::z_axis());
    /// assert!((p - Vector3::new(2.0, 3.0, 1.0)).magnitude() < 1e-14);
    /// ```
    pub fn planar_project(&self, origin: &Self, normal: &Self) -> Self {
        *self + (*origin - *self).project(normal)
    }

    /// 2D coordinates of this point within a plane's local frame.
    ///
    /// The point is first projected onto the plane (`origin`, `normal`). The second
    /// coordinate is measured along `y_axis`; the first along `y_axis` rotated by
    /// `π/2` about `normal`. Both coordinates are signed.
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let (u, v) = Vector3::new(2.0, 3.0, 5.0).project_2d(
    ///     &Vector3::zeros(),
    ///     &Vector3::z_axis(),
    ///     &Vector3::y_axis(),
    /// );
    /// // +Y rotated a quarter turn about +Z points along -X.
    /// assert!((u + 2.0).abs() < 1e-14);
    /// assert!((v - 3.0).abs() < 1e-14);
    /// ```
    pub fn project_2d(&self, origin: &Self, normal: &Self, y_axis: &Self) -> (f64, f64) {
        let in_plane = self.planar_project(origin, normal) - *origin;
        let x_axis = y_axis.rotate_axis(normal, HALF_PI);
        let mag = in_plane.magnitude();

        (
            libm::cos(in_plane.angle_between(&x_axis)) * mag,
            libm::cos(in_plane.angle_between(y_axis)) * mag,
        )
    }

    /// Perpendicular distance from this point to the infinite line through `a` and `b`.
    ///
    /// Uses the three pairwise distances of the triangle `(self, a, b)` and solves for
    /// its height over the base `ab`. The radicand is clamped at zero to absorb
    /// rounding. `a == b` does not define a line; the base length is zero and the
    /// clamp turns the resulting NaN into a distance of 0.
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let d = Vector3::z_axis().distance_from_line(&Vector3::zeros(), &Vector3::x_axis());
    /// assert_eq!(d, 1.0);
    /// ```
    pub fn distance_from_line(&self, a: &Self, b: &Self) -> f64 {
        let base_sq = (*b - *a).magnitude_squared();
        let to_a_sq = (*self - *a).magnitude_squared();
        let to_b_sq = (*self - *b).magnitude_squared();

        // Signed offset of the foot of the perpendicular from `a`, along `ab`.
        let along = (to_a_sq - to_b_sq + base_sq) / (2.0 * libm::sqrt(base_sq));
        libm::sqrt((to_a_sq - along * along).max(0.0))
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<[f64; 2]> for Vector3 {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_xy(arr[0], arr[1])
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64)> for Vector3 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::from_xy(x, y)
    }
}

impl From<VectorRecord> for Vector3 {
    fn from(record: VectorRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector * Vector (componentwise)
impl std::ops::Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_components(&rhs)
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
