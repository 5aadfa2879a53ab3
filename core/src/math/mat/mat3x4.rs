//! Affine 3x4 matrices.

use core::fmt::{self, Debug, Formatter};
use core::ops::Mul;

use crate::math::approx::ApproxEq;
use crate::math::float::Float;
use crate::math::mat::{Apply, Axis};
use crate::math::qvv::Qvv;
use crate::math::quat::Quat;
use crate::math::vec::{Vec3, vec3};

/// An affine transform: a linear map followed by a translation.
///
/// Stored as three basis axes, the images of the unit vectors under the
/// linear part, and a translation `w_axis`. Equivalent to the 4x4 matrix
/// ```text
/// [ x_axis  0 ]
/// [ y_axis  0 ]
/// [ z_axis  0 ]
/// [ w_axis  1 ]
/// ```
/// whose last column is implicit and cannot be set to anything else.
///
/// A point `p` is transformed as `p.x * x_axis + p.y * y_axis + p.z * z_axis
/// + w_axis`; a direction the same way but without the translation. The
/// axes need not be linearly independent, but only matrices with a non-zero
/// [determinant][Self::determinant] have an inverse.
#[derive(Copy, Clone, PartialEq)]
pub struct Mat3x4<S = f32> {
    pub x_axis: Vec3<S>,
    pub y_axis: Vec3<S>,
    pub z_axis: Vec3<S>,
    pub w_axis: Vec3<S>,
}

impl<S: Float> Mat3x4<S> {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        vec3(S::ZERO, S::ZERO, S::ZERO),
    );

    /// Returns a matrix with the given basis axes and translation.
    ///
    /// The arguments are stored as is.
    #[inline]
    pub const fn new(
        x_axis: Vec3<S>,
        y_axis: Vec3<S>,
        z_axis: Vec3<S>,
        w_axis: Vec3<S>,
    ) -> Self {
        Self { x_axis, y_axis, z_axis, w_axis }
    }

    /// Returns the identity transform.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the rotation represented by the unit quaternion `q`.
    pub fn from_quat(q: &Quat<S>) -> Self {
        let Quat { x, y, z, w } = *q;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        let one = S::ONE;

        Self::new(
            vec3(one - (yy + zz), xy + wz, xz - wy),
            vec3(xy - wz, one - (xx + zz), yz + wx),
            vec3(xz + wy, yz - wx, one - (xx + yy)),
            Vec3::zero(),
        )
    }

    /// Returns the rotation `rotation` followed by the translation
    /// `translation`.
    #[inline]
    pub fn from_qv(rotation: &Quat<S>, translation: Vec3<S>) -> Self {
        Self { w_axis: translation, ..Self::from_quat(rotation) }
    }

    /// Returns the transform that scales, rotates, and translates, in that
    /// order.
    ///
    /// The scale is applied in local space: each basis axis is the image
    /// of the corresponding unit vector under `rotation`, scaled by the
    /// matching lane of `scale`.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::{mat::Mat3x4, quat::Quat, vec::vec3};
    ///
    /// let half = core::f32::consts::FRAC_1_SQRT_2;
    /// // A quarter turn about the z axis
    /// let q = Quat::new(0.0, 0.0, half, half);
    /// let m = Mat3x4::from_qvv(&q, vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0));
    ///
    /// assert_approx_eq!(m.x_axis, vec3(0.0, 4.0, 0.0));
    /// assert_approx_eq!(m.y_axis, vec3(-5.0, 0.0, 0.0));
    /// assert_approx_eq!(m.z_axis, vec3(0.0, 0.0, 6.0));
    /// assert_eq!(m.w_axis, vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn from_qvv(
        rotation: &Quat<S>,
        translation: Vec3<S>,
        scale: Vec3<S>,
    ) -> Self {
        let r = Self::from_quat(rotation);
        Self::new(
            r.x_axis * scale.x(),
            r.y_axis * scale.y(),
            r.z_axis * scale.z(),
            translation,
        )
    }

    /// Returns the row of `self` named by `axis`.
    #[inline]
    pub fn axis(&self, axis: Axis) -> Vec3<S> {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
            Axis::Z => self.z_axis,
            Axis::W => self.w_axis,
        }
    }

    /// Returns the point `p` transformed by `self`, including translation.
    #[inline]
    pub fn transform_point(&self, p: &Vec3<S>) -> Vec3<S> {
        self.transform_vector(p) + self.w_axis
    }

    /// Returns the direction `v` transformed by the linear part of `self`,
    /// ignoring translation.
    #[inline]
    pub fn transform_vector(&self, v: &Vec3<S>) -> Vec3<S> {
        self.x_axis * v.x() + self.y_axis * v.y() + self.z_axis * v.z()
    }

    /// Returns the composite transform that first applies `self`, then
    /// `other`.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::{mat::{scale, translate}, vec::vec3};
    ///
    /// let m = translate(vec3(1.0f32, 0.0, 0.0)).then(&scale(vec3(2.0, 2.0, 2.0)));
    /// assert_eq!(m.transform_point(&vec3(0.0, 1.0, 0.0)), vec3(2.0, 2.0, 0.0));
    /// ```
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self::new(
            other.transform_vector(&self.x_axis),
            other.transform_vector(&self.y_axis),
            other.transform_vector(&self.z_axis),
            other.transform_point(&self.w_axis),
        )
    }

    /// Returns the composite transform that first applies `other`, then
    /// `self`.
    #[inline]
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        other.then(self)
    }

    /// Returns the determinant of the linear part of `self`.
    ///
    /// Equal to the signed volume of the parallelepiped spanned by the
    /// three basis axes. Negative if `self` mirrors.
    #[inline]
    pub fn determinant(&self) -> S {
        self.x_axis.dot(&self.y_axis.cross(&self.z_axis))
    }

    /// Returns the inverse of `self`, or `None` if the absolute value of
    /// the determinant is less than `threshold` or not a number.
    pub fn try_inverse(&self, threshold: S) -> Option<Self> {
        let (adj, det) = self.adjugate();
        (det.abs() >= threshold).then(|| adj.invert_with(det.recip(), self))
    }

    /// Returns the inverse of `self`.
    ///
    /// The linear part is inverted with the adjugate method, and the new
    /// translation is the old one transformed by the inverted linear part
    /// and negated.
    ///
    /// No singularity check is made. The determinant is inverted as is, so
    /// if `self` is singular the result has non-finite components: an
    /// exactly singular linear part such as the zero matrix yields NaN
    /// in every lane, and NaNs propagate through anything computed from
    /// it. Use [`inverse_or`][Self::inverse_or] or
    /// [`try_inverse`][Self::try_inverse] to handle singular input.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::{mat::{scale, translate, Mat3x4}, vec::vec3};
    ///
    /// let m = scale(vec3(2.0f64, 4.0, 8.0)).then(&translate(vec3(1.0, 2.0, 3.0)));
    /// let inv = m.inverse();
    /// assert_approx_eq!(inv.transform_point(&vec3(3.0, 6.0, 11.0)), vec3(1.0, 1.0, 1.0));
    /// assert_approx_eq!(m.then(&inv), Mat3x4::IDENTITY);
    /// ```
    pub fn inverse(&self) -> Self {
        let (adj, det) = self.adjugate();
        adj.invert_with(det.recip(), self)
    }

    /// Returns the inverse of `self`, or `fallback` if `self` is singular
    /// or nearly so.
    ///
    /// `self` is considered nearly singular if the absolute value of its
    /// determinant is less than [`Float::INVERSE_THRESHOLD`]. `fallback`
    /// is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::{mat::Mat3x4, vec::Vec3};
    ///
    /// let zero = Vec3::<f32>::zero();
    /// let m = Mat3x4::new(zero, zero, zero, zero);
    /// assert_eq!(m.inverse_or(Mat3x4::IDENTITY), Mat3x4::IDENTITY);
    /// ```
    #[inline]
    pub fn inverse_or(&self, fallback: Self) -> Self {
        self.try_inverse(S::INVERSE_THRESHOLD).unwrap_or(fallback)
    }

    /// Returns the cofactors of the linear part of `self`, as columns, and
    /// the determinant.
    fn adjugate(&self) -> (Self, S) {
        let c0 = self.y_axis.cross(&self.z_axis);
        let c1 = self.z_axis.cross(&self.x_axis);
        let c2 = self.x_axis.cross(&self.y_axis);
        let det = self.x_axis.dot(&c0);
        (Self::new(c0, c1, c2, Vec3::zero()), det)
    }

    /// Finishes the inverse of `orig` from the cofactor columns in `self`.
    fn invert_with(&self, rcp_det: S, orig: &Self) -> Self {
        let [c0, c1, c2] = [self.x_axis, self.y_axis, self.z_axis];
        let linear = Self::new(
            vec3(c0.x(), c1.x(), c2.x()) * rcp_det,
            vec3(c0.y(), c1.y(), c2.y()) * rcp_det,
            vec3(c0.z(), c1.z(), c2.z()) * rcp_det,
            Vec3::zero(),
        );
        Self {
            w_axis: -linear.transform_vector(&orig.w_axis),
            ..linear
        }
    }

    /// Returns `self` with each basis axis scaled to unit length.
    ///
    /// Axes of zero length are left as they are. The translation is kept.
    #[must_use]
    pub fn remove_scale(&self) -> Self {
        let unit = |v: Vec3<S>| {
            if v.len_sqr() > S::ZERO { v.normalize() } else { v }
        };
        Self::new(
            unit(self.x_axis),
            unit(self.y_axis),
            unit(self.z_axis),
            self.w_axis,
        )
    }

    /// Decomposes `self` into a rotation, a translation, and a scale.
    ///
    /// The translation is `w_axis` and the scale the lengths of the three
    /// basis axes. If `self` mirrors, the z scale is negated. The rotation
    /// is fitted to the axes orthonormalized with the Gram–Schmidt process,
    /// starting from `x_axis`; any shear is discarded.
    ///
    /// If the determinant of the *normalized* axes is less than
    /// [`Float::INVERSE_THRESHOLD`] in absolute value, or not a number, the
    /// axes are (nearly) linearly dependent and the rotation is the
    /// identity. The test does not depend on the magnitude of the scale.
    ///
    /// For matrices built with [`from_qvv`][Self::from_qvv] with a positive
    /// scale, `from_qvv` of the result reproduces `self` up to rounding.
    pub fn to_qvv(&self) -> Qvv<S> {
        let [x, y, z] =
            [self.x_axis, self.y_axis, self.z_axis].map(|a| a.normalize());
        let unit_det = x.dot(&y.cross(&z));

        let sign = if unit_det < S::ZERO { -S::ONE } else { S::ONE };
        let scale = vec3(
            self.x_axis.len(),
            self.y_axis.len(),
            self.z_axis.len() * sign,
        );

        let rotation = if unit_det.abs() >= S::INVERSE_THRESHOLD {
            let y = (y - x * x.dot(&y)).normalize();
            Quat::from_rotation_axes(&x, &y, &x.cross(&y))
        } else {
            Quat::IDENTITY
        };
        Qvv::new(rotation, self.w_axis, scale)
    }

    /// Converts each lane of `self` to another scalar type.
    pub fn cast<T: Float>(&self) -> Mat3x4<T> {
        Mat3x4::new(
            self.x_axis.cast(),
            self.y_axis.cast(),
            self.z_axis.cast(),
            self.w_axis.cast(),
        )
    }
}

impl<S: Float> Apply<Vec3<S>> for Mat3x4<S> {
    type Output = Vec3<S>;

    /// Transforms `p` as a point. See [`Mat3x4::transform_point`].
    #[inline]
    fn apply(&self, p: &Vec3<S>) -> Vec3<S> {
        self.transform_point(p)
    }
}

impl<S: Float> ApproxEq<Self, S> for Mat3x4<S> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        [self.x_axis, self.y_axis, self.z_axis, self.w_axis].approx_eq_eps(
            &[other.x_axis, other.y_axis, other.z_axis, other.w_axis],
            eps,
        )
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<S: Float> Default for Mat3x4<S> {
    /// Returns the identity transform.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<S: Float> From<[[S; 3]; 4]> for Mat3x4<S> {
    /// Creates a matrix from the rows `[x_axis, y_axis, z_axis, w_axis]`.
    #[inline]
    fn from([x, y, z, w]: [[S; 3]; 4]) -> Self {
        Self::new(x.into(), y.into(), z.into(), w.into())
    }
}

impl<S: Float> Mul for Mat3x4<S> {
    type Output = Self;

    /// Returns `self.then(&rhs)`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.then(&rhs)
    }
}

impl<S: Debug> Debug for Mat3x4<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat3x4[")?;
        for row in [&self.x_axis, &self.y_axis, &self.z_axis, &self.w_axis] {
            writeln!(f, "    {:6.2?}", row.0)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::mat::{scale, translate};

    use super::*;

    const SQRT_HALF: f64 = core::f64::consts::FRAC_1_SQRT_2;

    /// A quarter turn about the z axis, mapping +x to +y.
    fn quarter_z<S: Float>() -> Quat<S> {
        let h = S::from_f64(SQRT_HALF);
        Quat::new(S::ZERO, S::ZERO, h, h)
    }
    /// A quarter turn about the x axis, mapping +y to +z.
    fn quarter_x<S: Float>() -> Quat<S> {
        let h = S::from_f64(SQRT_HALF);
        Quat::new(h, S::ZERO, S::ZERO, h)
    }

    mod single {
        use super::*;

        #[test]
        fn identity() {
            let m = Mat3x4::<f32>::identity();
            assert_eq!(m, Mat3x4::IDENTITY);
            assert_eq!(m, Mat3x4::default());
            assert_eq!(m.x_axis, vec3(1.0, 0.0, 0.0));
            assert_eq!(m.w_axis, vec3(0.0, 0.0, 0.0));
        }

        #[test]
        fn new_stores_axes() {
            let (x, y) = (vec3(1.0f32, 2.0, 3.0), vec3(-4.0, 5.0, -6.0));
            let (z, w) = (vec3(7.0, -8.0, 9.0), vec3(0.5, 0.25, -0.125));
            let m = Mat3x4::new(x, y, z, w);

            assert_eq!([m.x_axis, m.y_axis, m.z_axis, m.w_axis], [x, y, z, w]);
            assert_eq!(m.axis(Axis::Y), y);
            assert_eq!(m.axis(Axis::W), w);
            assert_eq!(Mat3x4::from([x.0, y.0, z.0, w.0]), m);
        }

        #[test]
        fn from_qvv_scales_in_local_space() {
            let m = Mat3x4::from_qvv(
                &quarter_z::<f32>(),
                vec3(1.0, 2.0, 3.0),
                vec3(4.0, 5.0, 6.0),
            );
            assert_approx_eq!(m.x_axis, vec3(0.0, 4.0, 0.0));
            assert_approx_eq!(m.y_axis, vec3(-5.0, 0.0, 0.0));
            assert_approx_eq!(m.z_axis, vec3(0.0, 0.0, 6.0));
            assert_eq!(m.w_axis, vec3(1.0, 2.0, 3.0));

            let p = m.transform_point(&vec3(1.0, 0.0, 0.0));
            assert_approx_eq!(p, vec3(1.0, 6.0, 3.0));
            let v = m.transform_vector(&vec3(1.0, 0.0, 0.0));
            assert_approx_eq!(v, vec3(0.0, 4.0, 0.0));
        }

        #[test]
        fn from_quat_agrees_with_rotate() {
            let q = quarter_z::<f32>().then(&quarter_x());
            let m = Mat3x4::from_quat(&q);
            for v in [vec3(1.0, 0.0, 0.0), vec3(0.3, -2.0, 1.5)] {
                assert_approx_eq!(m.transform_vector(&v), q.rotate(&v), eps = 1e-5);
            }
        }

        #[test]
        fn multiply_by_identity() {
            let m = Mat3x4::from_qvv(
                &quarter_x(),
                vec3(1.0f32, -2.0, 3.0),
                vec3(2.0, 3.0, 4.0),
            );
            assert_approx_eq!(m * Mat3x4::IDENTITY, m);
            assert_approx_eq!(Mat3x4::IDENTITY * m, m);
        }

        #[test]
        fn composition_order() {
            let a = Mat3x4::from_quat(&quarter_z::<f32>());
            let b = Mat3x4::from_quat(&quarter_x::<f32>());
            let p = vec3(1.0, 0.0, 0.0);

            let a_then_b = b.transform_point(&a.transform_point(&p));
            let b_then_a = a.transform_point(&b.transform_point(&p));
            assert_approx_eq!(a_then_b, vec3(0.0, 0.0, 1.0));
            assert_approx_eq!(b_then_a, vec3(0.0, 1.0, 0.0));

            assert_approx_eq!((a * b).transform_point(&p), a_then_b);
            assert_approx_eq!((b * a).transform_point(&p), b_then_a);
            assert_approx_eq!(b.compose(&a), a * b);
        }

        #[test]
        fn inverse_of_qvv() {
            let m = Mat3x4::from_qvv(
                &quarter_z::<f32>(),
                vec3(1.0, 2.0, 3.0),
                vec3(4.0, 5.0, 6.0),
            );
            let id = Mat3x4::IDENTITY;
            assert_approx_eq!(m * m.inverse(), id, eps = 1e-4);
            assert_approx_eq!(m * m.inverse_or(m), id, eps = 1e-4);
            assert_approx_eq!(m.inverse() * m, id, eps = 1e-4);
        }

        #[test]
        fn singular_inverse_falls_back() {
            let zero = Vec3::<f32>::zero();
            let m = Mat3x4::new(zero, zero, zero, zero);
            assert_eq!(m.inverse_or(Mat3x4::IDENTITY), Mat3x4::IDENTITY);
            assert_eq!(m.try_inverse(1e-8), None);

            let flat = scale(vec3(1.0f32, 1.0, 0.0));
            assert_eq!(flat.inverse_or(flat), flat);
        }

        #[test]
        fn singular_inverse_is_non_finite() {
            let inv = scale(vec3(1.0f32, 0.0, 1.0)).inverse();
            assert!(inv.y_axis.0.iter().any(|e| !e.is_finite()));

            let zero = Vec3::<f32>::zero();
            let inv = Mat3x4::new(zero, zero, zero, zero).inverse();
            for row in [inv.x_axis, inv.y_axis, inv.z_axis, inv.w_axis] {
                assert!(row.0.iter().all(|e| e.is_nan()), "{inv:?}");
            }
        }

        #[test]
        fn to_qvv_of_small_scale() {
            let s = vec3(2e-3f32, 2e-3, 2e-3);
            let m = Mat3x4::from_qvv(&quarter_z(), vec3(1.0, 2.0, 3.0), s);
            assert!(m.determinant() < f32::INVERSE_THRESHOLD);

            let qvv = m.to_qvv();
            assert_approx_eq!(qvv.rotation.rotate(&Vec3::X), Vec3::Y, eps = 1e-5);
            assert_approx_eq!(qvv.to_matrix(), m, eps = 1e-6);
        }

        #[test]
        fn debug() {
            let m = translate(vec3(1.0f32, -2.0, 30.0));
            let expected = r#"Mat3x4[
    [  1.00,   0.00,   0.00]
    [  0.00,   1.00,   0.00]
    [  0.00,   0.00,   1.00]
    [  1.00,  -2.00,  30.00]
]"#;
            assert_eq!(alloc::format!("{m:?}"), expected);
        }
    }

    mod double {
        use super::*;

        #[test]
        fn determinant() {
            let m = scale(vec3(2.0f64, 3.0, 4.0)).then(&translate(Vec3::X));
            assert_eq!(m.determinant(), 24.0);

            let mirror = scale(vec3(1.0f64, -1.0, 1.0));
            assert_eq!(mirror.determinant(), -1.0);

            let rot = Mat3x4::from_quat(&quarter_z::<f64>());
            assert_approx_eq!(rot.determinant(), 1.0);
        }

        #[test]
        fn inverse_of_general_affine() {
            let m: Mat3x4<f64> = [
                [1.65424, 0.22921, 5.73038],
                [1.90220, 0.82590, 6.61556],
                [7.36288, 7.09841, 0.33519],
                [4.42391, 4.03858, 2.49537],
            ]
            .into();
            let inv = m.inverse();
            assert_approx_eq!(m * inv, Mat3x4::IDENTITY, eps = 1e-10);
            assert_approx_eq!(inv * m, Mat3x4::IDENTITY, eps = 1e-10);

            let p = vec3(-3.0, 0.5, 2.0);
            let back = inv.transform_point(&m.transform_point(&p));
            assert_approx_eq!(back, p, eps = 1e-10);
        }

        #[test]
        fn try_inverse_threshold() {
            // Determinant 1e-6
            let m = scale(vec3(1e-2f64, 1e-2, 1e-2));
            assert!(m.try_inverse(1e-5).is_none());
            assert_approx_eq!(
                m.try_inverse(1e-8),
                Some(scale(vec3(1e2, 1e2, 1e2))),
                eps = 1e-9
            );
            assert_approx_eq!(m.inverse_or(Mat3x4::IDENTITY), m.inverse());
        }

        #[test]
        fn nan_determinant_falls_back() {
            let nan = vec3(f64::NAN, 0.0, 0.0);
            let m = Mat3x4 { x_axis: nan, ..Mat3x4::IDENTITY };
            assert_eq!(m.inverse_or(Mat3x4::IDENTITY), Mat3x4::IDENTITY);
        }

        #[test]
        fn remove_scale() {
            let m = Mat3x4::from_qvv(
                &quarter_x::<f64>(),
                vec3(1.0, 2.0, 3.0),
                vec3(2.0, 3.0, 0.5),
            );
            let r = m.remove_scale();
            assert_approx_eq!(r, Mat3x4::from_qv(&quarter_x(), m.w_axis), eps = 1e-10);

            let flat = scale(vec3(2.0f64, 0.0, 1.0));
            assert_eq!(flat.remove_scale(), scale(vec3(1.0, 0.0, 1.0)));
        }

        #[test]
        fn to_qvv_round_trip() {
            let q = quarter_z::<f64>().then(&quarter_x());
            let (t, s) = (vec3(-1.0, 0.5, 4.0), vec3(2.0, 0.25, 3.0));
            let m = Mat3x4::from_qvv(&q, t, s);

            let qvv = m.to_qvv();
            assert_eq!(qvv.translation, t);
            assert_approx_eq!(qvv.scale, s, eps = 1e-10);
            let y = qvv.rotation.rotate(&Vec3::Y);
            assert_approx_eq!(y, q.rotate(&Vec3::Y), eps = 1e-10);
            assert_approx_eq!(qvv.to_matrix(), m, eps = 1e-10);
        }

        #[test]
        fn to_qvv_of_mirror() {
            let m = Mat3x4::from_qvv(
                &quarter_z::<f64>(),
                Vec3::zero(),
                vec3(1.0, 2.0, -3.0),
            );
            let qvv = m.to_qvv();
            assert_approx_eq!(qvv.scale, vec3(1.0, 2.0, -3.0), eps = 1e-10);
            assert_approx_eq!(qvv.to_matrix(), m, eps = 1e-10);
        }

        #[test]
        fn to_qvv_of_small_scale() {
            // Determinant 1e-9, below the inversion threshold
            let t = vec3(1.0, 2.0, 3.0);
            let m = Mat3x4::from_qvv(&quarter_z::<f64>(), t, vec3(1e-3, 1e-3, 1e-3));
            assert!(m.determinant() < f64::INVERSE_THRESHOLD);

            let qvv = m.to_qvv();
            assert_approx_eq!(qvv.rotation.rotate(&Vec3::X), Vec3::Y, eps = 1e-10);
            assert_approx_eq!(qvv.scale, vec3(1e-3, 1e-3, 1e-3), eps = 1e-12);
            assert_approx_eq!(qvv.to_matrix(), m, eps = 1e-12);
        }

        #[test]
        fn to_qvv_of_singular() {
            let m = scale(vec3(2.0f64, 0.0, 1.0));
            let qvv = m.to_qvv();
            assert_eq!(qvv.rotation, Quat::IDENTITY);
            assert_eq!(qvv.scale, vec3(2.0, 0.0, 1.0));
        }

        #[test]
        fn cast_narrows_lanes() {
            let m = translate(vec3(0.1f64, 1e10, -3.0));
            let n = m.cast::<f32>();
            assert_eq!(n.w_axis, vec3(0.1f32, 1e10, -3.0));
            assert_approx_eq!(n.cast::<f64>(), m, eps = 1e-4);
        }
    }
}
