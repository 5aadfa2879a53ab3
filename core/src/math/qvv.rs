//! Rotation, translation, and scale triples.

use crate::math::approx::ApproxEq;
use crate::math::float::Float;
use crate::math::mat::Mat3x4;
use crate::math::quat::Quat;
use crate::math::vec::{Vec3, vec3};

/// A transform given as a rotation, a translation, and a per-axis scale.
///
/// Applying a `Qvv` to a point first scales it, then rotates it, and
/// finally translates it. A `Qvv` converts to an affine matrix with
/// [`to_matrix`][Self::to_matrix] and back with [`Mat3x4::to_qvv`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Qvv<S = f32> {
    pub rotation: Quat<S>,
    pub translation: Vec3<S>,
    pub scale: Vec3<S>,
}

impl<S: Float> Qvv<S> {
    /// The identity transform.
    pub const IDENTITY: Self = {
        let (o, l) = (S::ZERO, S::ONE);
        Self::new(Quat::IDENTITY, vec3(o, o, o), vec3(l, l, l))
    };

    #[inline]
    pub const fn new(
        rotation: Quat<S>,
        translation: Vec3<S>,
        scale: Vec3<S>,
    ) -> Self {
        Self { rotation, translation, scale }
    }

    /// Returns the affine matrix equivalent to `self`.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::{qvv::Qvv, quat::Quat, vec::vec3};
    ///
    /// let qvv = Qvv::new(Quat::IDENTITY, vec3(1.0f32, 2.0, 3.0), vec3(2.0, 2.0, 2.0));
    /// let m = qvv.to_matrix();
    /// assert_eq!(m.transform_point(&vec3(1.0, 0.0, -1.0)), vec3(3.0, 2.0, 1.0));
    /// assert_approx_eq!(m.to_qvv(), qvv);
    /// ```
    #[inline]
    pub fn to_matrix(&self) -> Mat3x4<S> {
        Mat3x4::from_qvv(&self.rotation, self.translation, self.scale)
    }

    /// Returns the point `p` scaled, rotated, and translated by `self`.
    pub fn transform_point(&self, p: &Vec3<S>) -> Vec3<S> {
        let [x, y, z] = p.0;
        let [sx, sy, sz] = self.scale.0;
        self.rotation.rotate(&Vec3::from([x * sx, y * sy, z * sz]))
            + self.translation
    }

    /// Converts each component of `self` to another scalar type.
    pub fn cast<T: Float>(&self) -> Qvv<T> {
        Qvv::new(
            self.rotation.cast(),
            self.translation.cast(),
            self.scale.cast(),
        )
    }
}

impl<S: Float> Default for Qvv<S> {
    /// Returns the identity transform.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<S: Float> From<Qvv<S>> for Mat3x4<S> {
    #[inline]
    fn from(qvv: Qvv<S>) -> Self {
        qvv.to_matrix()
    }
}

impl<S: Float> From<Mat3x4<S>> for Qvv<S> {
    /// Decomposes an affine matrix. See [`Mat3x4::to_qvv`].
    #[inline]
    fn from(m: Mat3x4<S>) -> Self {
        m.to_qvv()
    }
}

impl<S: Float> ApproxEq<Self, S> for Qvv<S> {
    /// Compares rotations as quaternions; `q` and `-q` are not considered
    /// approximately equal even though they represent the same rotation.
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.rotation.approx_eq_eps(&other.rotation, eps)
            && self.translation.approx_eq_eps(&other.translation, eps)
            && self.scale.approx_eq_eps(&other.scale, eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}
