//! Unit quaternions representing 3D rotations.

use core::ops::{Mul, Neg};

use crate::math::approx::ApproxEq;
use crate::math::float::Float;
use crate::math::vec::{Vec3, Vec4, vec3, vec4};
#[cfg(feature = "fp")]
use crate::math::angle::Angle;

/// A quaternion `xi + yj + zk + w`.
///
/// Only unit quaternions represent rotations; the methods of this type
/// assume unit length unless documented otherwise. `q` and `-q` represent
/// the same rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quat<S = f32> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Float> Quat<S> {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE);

    /// Returns a quaternion with the given components.
    #[inline]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    /// Returns a rotation of `angle` about `axis`, which must be of unit
    /// length. Positive angles rotate counter-clockwise when looking from
    /// the tip of the axis towards the origin.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::{angle::degs, quat::Quat, vec::{vec3, Vec3}};
    ///
    /// let q = Quat::from_axis_angle(Vec3::Z, degs(90.0f32));
    /// assert_approx_eq!(q.rotate(&Vec3::X), vec3(0.0, 1.0, 0.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn from_axis_angle(axis: Vec3<S>, angle: Angle<S>) -> Self {
        let (sin, cos) = (angle * S::HALF).sin_cos();
        let [x, y, z] = (axis * sin).0;
        Self::new(x, y, z, cos)
    }

    /// Returns a rotation from Euler angles.
    ///
    /// `yaw` rotates counter-clockwise about the +z axis, `pitch` clockwise
    /// about the +y axis, and `roll` clockwise about the +x axis. The
    /// rotations are applied in the order roll, pitch, yaw.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::{angle::degs, quat::Quat, vec::{vec3, Vec3}};
    ///
    /// let zero = degs(0.0f64);
    /// let yaw = Quat::from_euler(zero, degs(90.0), zero);
    /// assert_approx_eq!(yaw.rotate(&Vec3::X), vec3(0.0, 1.0, 0.0));
    ///
    /// let roll = Quat::from_euler(zero, zero, degs(90.0));
    /// assert_approx_eq!(roll.rotate(&Vec3::Y), vec3(0.0, 0.0, -1.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn from_euler(pitch: Angle<S>, yaw: Angle<S>, roll: Angle<S>) -> Self {
        let (sp, cp) = (pitch * S::HALF).sin_cos();
        let (sy, cy) = (yaw * S::HALF).sin_cos();
        let (sr, cr) = (roll * S::HALF).sin_cos();

        Self::new(
            cr * sp * sy - sr * cp * cy,
            -cr * sp * cy - sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Returns the unit quaternion of the rotation that maps the standard
    /// basis onto the orthonormal, right-handed basis `x`, `y`, `z`.
    ///
    /// Uses the largest of the trace and the diagonal elements as the
    /// pivot, which keeps the square root argument away from zero.
    pub fn from_rotation_axes(x: &Vec3<S>, y: &Vec3<S>, z: &Vec3<S>) -> Self {
        let trace = x.x() + y.y() + z.z();

        if trace > S::ZERO {
            let s = (trace + S::ONE).sqrt();
            let f = S::HALF / s;
            Self::new(
                (y.z() - z.y()) * f,
                (z.x() - x.z()) * f,
                (x.y() - y.x()) * f,
                s * S::HALF,
            )
        } else if x.x() >= y.y() && x.x() >= z.z() {
            let s = (S::ONE + x.x() - y.y() - z.z()).sqrt();
            let f = S::HALF / s;
            Self::new(
                s * S::HALF,
                (x.y() + y.x()) * f,
                (x.z() + z.x()) * f,
                (y.z() - z.y()) * f,
            )
        } else if y.y() > z.z() {
            let s = (S::ONE + y.y() - x.x() - z.z()).sqrt();
            let f = S::HALF / s;
            Self::new(
                (x.y() + y.x()) * f,
                s * S::HALF,
                (y.z() + z.y()) * f,
                (z.x() - x.z()) * f,
            )
        } else {
            let s = (S::ONE + z.z() - x.x() - y.y()).sqrt();
            let f = S::HALF / s;
            Self::new(
                (x.z() + z.x()) * f,
                (y.z() + z.y()) * f,
                s * S::HALF,
                (x.y() - y.x()) * f,
            )
        }
    }

    /// Returns the imaginary part of `self` as a vector.
    #[inline]
    pub fn vector(&self) -> Vec3<S> {
        vec3(self.x, self.y, self.z)
    }

    /// Returns the components of `self` as a 4-vector `(x, y, z, w)`.
    #[inline]
    pub fn to_vec4(&self) -> Vec4<S> {
        vec4(self.x, self.y, self.z, self.w)
    }

    /// Returns `v` rotated by `self`.
    pub fn rotate(&self, v: &Vec3<S>) -> Vec3<S> {
        let q = self.vector();
        let t = q.cross(v) * S::TWO;
        *v + t * self.w + q.cross(&t)
    }

    /// Returns the rotation that first applies `self`, then `other`.
    ///
    /// Equal to the Hamilton product `other * self`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        *other * *self
    }

    /// Returns the conjugate of `self`, the inverse rotation of a unit
    /// quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the dot product of `self` and `other` as 4-vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        self.to_vec4().dot(&other.to_vec4())
    }

    /// Returns the length of `self` as a 4-vector.
    #[inline]
    pub fn len(&self) -> S {
        self.to_vec4().len()
    }

    /// Returns `self` scaled to unit length.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        let [x, y, z, w] = self.to_vec4().normalize().0;
        Self::new(x, y, z, w)
    }

    /// Converts each component of `self` to another scalar type.
    #[inline]
    pub fn cast<T: Float>(self) -> Quat<T> {
        Quat::new(self.x.cast(), self.y.cast(), self.z.cast(), self.w.cast())
    }
}

//
// Local trait impls
//

impl<S: Float> ApproxEq<Self, S> for Quat<S> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.to_vec4().approx_eq_eps(&other.to_vec4(), eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<S: Float> Default for Quat<S> {
    /// Returns the identity rotation.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<S: Float> Mul for Quat<S> {
    type Output = Self;

    /// Returns the Hamilton product of `self` and `rhs`: the rotation
    /// that first applies `rhs`, then `self`.
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl<S: Float> Neg for Quat<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
