//! Matrices and linear transforms.
//!
//! Matrices in this crate use the *row vector* convention: a vector is
//! transformed by multiplying it from the right, `v' = v * M`, and the
//! rows of a matrix are the images of the basis vectors. Consequently the
//! product `a * b` represents the transform "apply `a`, then `b`".
//!
//! Two shapes are provided:
//! * [`Mat3x4`], an affine transform with three basis axes and a
//!   translation, whose homogeneous column `[0, 0, 0, 1]` is implicit;
//! * [`Mat4x4`], a general 4x4 matrix, able to represent projections.
//!
//! Both are generic over the [`Float`] scalar type and convert into each
//! other and across precisions without arithmetic (see `Mat4x4::from`
//! and [`Mat4x4::to_affine`]).

use core::ops::Range;

use crate::math::float::Float;
use crate::math::vec::{Vec3, vec3, vec4};

pub use self::{mat3x4::Mat3x4, mat4x4::Mat4x4};

pub mod mat3x4;
pub mod mat4x4;

mod cast;

/// Names one of the four rows of a matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    /// The translation row.
    W,
}

/// Trait for applying a transform to a value.
pub trait Apply<T> {
    type Output;

    /// Applies `self` to `t`.
    fn apply(&self, t: &T) -> Self::Output;
}

/// Returns an affine matrix scaling each axis by the matching lane of `s`.
///
/// # Examples
/// ```
/// use rigmath_core::math::{mat::{scale, Apply}, vec::vec3};
///
/// let m = scale(vec3(1.0f32, -2.0, 3.0));
/// assert_eq!(m.apply(&vec3(0.0, 4.0, -3.0)), vec3(0.0, -8.0, -9.0));
/// ```
pub fn scale<S: Float>(s: Vec3<S>) -> Mat3x4<S> {
    let [x, y, z] = s.0;
    let o = S::ZERO;
    Mat3x4::new(vec3(x, o, o), vec3(o, y, o), vec3(o, o, z), Vec3::zero())
}

/// Returns an affine matrix translating points by `t`.
///
/// # Examples
/// ```
/// use rigmath_core::math::{mat::{translate, Apply}, vec::vec3};
///
/// let m = translate(vec3(1.0f64, 2.0, 3.0));
/// assert_eq!(m.apply(&vec3(0.0, 5.0, -3.0)), vec3(1.0, 7.0, 0.0));
/// ```
pub fn translate<S: Float>(t: Vec3<S>) -> Mat3x4<S> {
    Mat3x4 { w_axis: t, ..Mat3x4::IDENTITY }
}

/// Returns a perspective projection matrix.
///
/// The view space is right-handed with the camera looking towards +z.
/// `focal_ratio` is the ratio of the focal distance to half the width of
/// the view plane, `aspect` the width divided by height, and `near..far`
/// the range of depths mapped to `-1..1` after the perspective divide.
///
/// The returned matrix has a non-affine last column; it must be inverted
/// with the general [`Mat4x4::inverse`].
///
/// # Examples
/// ```
/// # use rigmath_core::assert_approx_eq;
/// use rigmath_core::math::{mat::{perspective, Apply}, vec::vec4};
///
/// let m = perspective(1.0f32, 1.0, 1.0..10.0);
/// let near = m.apply(&vec4(0.0, 0.0, 1.0, 1.0));
/// let far = m.apply(&vec4(0.0, 0.0, 10.0, 1.0));
/// assert_approx_eq!(near.z() / near.w(), -1.0);
/// assert_approx_eq!(far.z() / far.w(), 1.0);
/// ```
pub fn perspective<S: Float>(
    focal_ratio: S,
    aspect: S,
    near_far: Range<S>,
) -> Mat4x4<S> {
    let (near, far) = (near_far.start, near_far.end);
    let o = S::ZERO;

    let m33 = (far + near) / (far - near);
    let m43 = -near * m33 - near;
    Mat4x4::new(
        vec4(focal_ratio, o, o, o),
        vec4(o, focal_ratio * aspect, o, o),
        vec4(o, o, m33, S::ONE),
        vec4(o, o, m43, o),
    )
}

/// Returns an orthographic projection matrix mapping the box `min..max`
/// onto the cube `-1..1` in each dimension.
///
/// # Examples
/// ```
/// use rigmath_core::math::{mat::{orthographic, Apply}, vec::vec3};
///
/// let m = orthographic(vec3(-2.0f64, 0.0, 1.0)..vec3(2.0, 4.0, 5.0));
/// assert_eq!(m.to_affine().apply(&vec3(2.0, 0.0, 3.0)), vec3(1.0, -1.0, 0.0));
/// ```
pub fn orthographic<S: Float>(min_max: Range<Vec3<S>>) -> Mat4x4<S> {
    let (min, max) = (min_max.start, min_max.end);
    let size = max - min;
    let [sx, sy, sz] = size.0.map(|s| S::TWO / s);
    let [tx, ty, tz] = (min + max).0;
    let o = S::ZERO;
    Mat4x4::new(
        vec4(sx, o, o, o),
        vec4(o, sy, o, o),
        vec4(o, o, sz, o),
        vec4(-tx / size.x(), -ty / size.y(), -tz / size.z(), S::ONE),
    )
}
