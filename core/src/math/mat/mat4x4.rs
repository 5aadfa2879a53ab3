//! General 4x4 matrices.

use core::fmt::{self, Debug, Formatter};
use core::ops::Mul;

use crate::math::approx::ApproxEq;
use crate::math::float::Float;
use crate::math::mat::{Apply, Axis};
use crate::math::vec::{Vec4, vec4};

/// A general 4x4 matrix, capable of representing projective transforms.
///
/// Stored as four rows `x_axis`, `y_axis`, `z_axis`, and `w_axis`. A
/// homogeneous row vector `v` is transformed as `v * M`, that is,
/// `v.x * x_axis + v.y * y_axis + v.z * z_axis + v.w * w_axis`.
///
/// An affine [`Mat3x4`][super::Mat3x4] converts into a `Mat4x4` with
/// [`From`]; the reverse conversion is [`to_affine`][Self::to_affine].
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4x4<S = f32> {
    pub x_axis: Vec4<S>,
    pub y_axis: Vec4<S>,
    pub z_axis: Vec4<S>,
    pub w_axis: Vec4<S>,
}

impl<S: Float> Mat4x4<S> {
    /// The identity matrix.
    pub const IDENTITY: Self = {
        let (o, l) = (S::ZERO, S::ONE);
        Self::new(
            vec4(l, o, o, o),
            vec4(o, l, o, o),
            vec4(o, o, l, o),
            vec4(o, o, o, l),
        )
    };

    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(
        x_axis: Vec4<S>,
        y_axis: Vec4<S>,
        z_axis: Vec4<S>,
        w_axis: Vec4<S>,
    ) -> Self {
        Self { x_axis, y_axis, z_axis, w_axis }
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the row of `self` named by `axis`.
    #[inline]
    pub fn axis(&self, axis: Axis) -> Vec4<S> {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
            Axis::Z => self.z_axis,
            Axis::W => self.w_axis,
        }
    }

    /// Returns the `i`th row of `self`.
    ///
    /// # Panics
    /// If `i > 3`.
    #[inline]
    pub fn row_vec(&self, i: usize) -> Vec4<S> {
        self.rows()[i]
    }

    /// Returns the `i`th column of `self`.
    ///
    /// # Panics
    /// If `i > 3`.
    #[inline]
    pub fn col_vec(&self, i: usize) -> Vec4<S> {
        let [x, y, z, w] = self.rows();
        vec4(x[i], y[i], z[i], w[i])
    }

    #[inline]
    fn rows(&self) -> [Vec4<S>; 4] {
        [self.x_axis, self.y_axis, self.z_axis, self.w_axis]
    }

    /// Returns the row vector `v` multiplied by `self`.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::{mat::Mat4x4, vec::vec4};
    ///
    /// let m: Mat4x4<f64> = [
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 1.0],
    ///     [5.0, 0.0, 0.0, 0.0],
    /// ].into();
    /// assert_eq!(m.mul_vector(&vec4(1.0, 1.0, 3.0, 1.0)), vec4(6.0, 2.0, 3.0, 3.0));
    /// ```
    #[inline]
    pub fn mul_vector(&self, v: &Vec4<S>) -> Vec4<S> {
        self.x_axis * v.x()
            + self.y_axis * v.y()
            + self.z_axis * v.z()
            + self.w_axis * v.w()
    }

    /// Returns the composite transform that first applies `self`, then
    /// `other`. Equal to the matrix product `self * other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self::new(
            other.mul_vector(&self.x_axis),
            other.mul_vector(&self.y_axis),
            other.mul_vector(&self.z_axis),
            other.mul_vector(&self.w_axis),
        )
    }

    /// Returns the composite transform that first applies `other`, then
    /// `self`. Equal to the matrix product `other * self`.
    #[inline]
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        other.then(self)
    }

    /// Returns the transpose of `self`: the rows of the result are the
    /// columns of `self`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.col_vec(0),
            self.col_vec(1),
            self.col_vec(2),
            self.col_vec(3),
        )
    }

    /// Returns the determinant of `self`.
    ///
    /// Computed as a sum of products of 2x2 minors of the upper and lower
    /// halves of `self`, equivalent to a cofactor expansion.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::mat::Mat4x4;
    ///
    /// let m: Mat4x4<f64> = [
    ///     [2.0, 0.0, 0.0, 0.0],
    ///     [0.0, 3.0, 0.0, 0.0],
    ///     [0.0, 0.0, 0.0, 4.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    /// ].into();
    /// assert_eq!(m.determinant(), -24.0);
    /// ```
    pub fn determinant(&self) -> S {
        Minors::of(self).determinant()
    }

    /// Returns the inverse of `self`, or `None` if the absolute value of
    /// the determinant is less than `threshold` or not a number.
    pub fn try_inverse(&self, threshold: S) -> Option<Self> {
        let minors = Minors::of(self);
        let det = minors.determinant();
        (det.abs() >= threshold).then(|| minors.adjugate(self) * det.recip())
    }

    /// Returns the inverse of `self`, computed as the adjugate matrix
    /// divided by the determinant.
    ///
    /// No singularity check is made. The determinant is inverted as is, so
    /// if `self` is singular the result has non-finite components: the
    /// zero matrix, for instance, yields NaN in every lane, and NaNs
    /// propagate through anything computed from it. Use
    /// [`inverse_or`][Self::inverse_or] or [`try_inverse`][Self::try_inverse]
    /// to handle singular input.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::mat::{perspective, Mat4x4};
    ///
    /// let m = perspective(1.0f32, 16.0 / 9.0, 0.1..100.0);
    /// assert_approx_eq!(m * m.inverse(), Mat4x4::IDENTITY, eps = 1e-4);
    /// ```
    pub fn inverse(&self) -> Self {
        let minors = Minors::of(self);
        minors.adjugate(self) * minors.determinant().recip()
    }

    /// Returns the inverse of `self`, or `fallback` if `self` is singular
    /// or nearly so.
    ///
    /// `self` is considered nearly singular if the absolute value of its
    /// determinant is less than [`Float::INVERSE_THRESHOLD`]. `fallback`
    /// is returned unchanged.
    #[inline]
    pub fn inverse_or(&self, fallback: Self) -> Self {
        self.try_inverse(S::INVERSE_THRESHOLD).unwrap_or(fallback)
    }

    /// Converts each lane of `self` to another scalar type.
    pub fn cast<T: Float>(&self) -> Mat4x4<T> {
        Mat4x4::new(
            self.x_axis.cast(),
            self.y_axis.cast(),
            self.z_axis.cast(),
            self.w_axis.cast(),
        )
    }
}

/// The 2x2 minors of the top two rows (`s`) and the bottom two rows (`c`)
/// of a 4x4 matrix, indexed by column pair in lexicographic order.
struct Minors<S> {
    s: [S; 6],
    c: [S; 6],
}

impl<S: Float> Minors<S> {
    fn of(m: &Mat4x4<S>) -> Self {
        let pairs = |r: &Vec4<S>, t: &Vec4<S>| {
            let m2 = |i: usize, j: usize| r[i] * t[j] - t[i] * r[j];
            [m2(0, 1), m2(0, 2), m2(0, 3), m2(1, 2), m2(1, 3), m2(2, 3)]
        };
        Self {
            s: pairs(&m.x_axis, &m.y_axis),
            c: pairs(&m.z_axis, &m.w_axis),
        }
    }

    fn determinant(&self) -> S {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) =
            (self.s, self.c);
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Returns the adjugate of `m`, the transpose of its cofactor matrix.
    fn adjugate(&self, m: &Mat4x4<S>) -> Mat4x4<S> {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) =
            (self.s, self.c);
        let [a0, a1, a2, a3] = m.rows().map(|r| r.0);

        Mat4x4::new(
            vec4(
                a1[1] * c5 - a1[2] * c4 + a1[3] * c3,
                -a0[1] * c5 + a0[2] * c4 - a0[3] * c3,
                a3[1] * s5 - a3[2] * s4 + a3[3] * s3,
                -a2[1] * s5 + a2[2] * s4 - a2[3] * s3,
            ),
            vec4(
                -a1[0] * c5 + a1[2] * c2 - a1[3] * c1,
                a0[0] * c5 - a0[2] * c2 + a0[3] * c1,
                -a3[0] * s5 + a3[2] * s2 - a3[3] * s1,
                a2[0] * s5 - a2[2] * s2 + a2[3] * s1,
            ),
            vec4(
                a1[0] * c4 - a1[1] * c2 + a1[3] * c0,
                -a0[0] * c4 + a0[1] * c2 - a0[3] * c0,
                a3[0] * s4 - a3[1] * s2 + a3[3] * s0,
                -a2[0] * s4 + a2[1] * s2 - a2[3] * s0,
            ),
            vec4(
                -a1[0] * c3 + a1[1] * c1 - a1[2] * c0,
                a0[0] * c3 - a0[1] * c1 + a0[2] * c0,
                -a3[0] * s3 + a3[1] * s1 - a3[2] * s0,
                a2[0] * s3 - a2[1] * s1 + a2[2] * s0,
            ),
        )
    }
}

impl<S: Float> Apply<Vec4<S>> for Mat4x4<S> {
    type Output = Vec4<S>;

    /// Returns `self.mul_vector(v)`.
    #[inline]
    fn apply(&self, v: &Vec4<S>) -> Vec4<S> {
        self.mul_vector(v)
    }
}

impl<S: Float> ApproxEq<Self, S> for Mat4x4<S> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.rows().approx_eq_eps(&other.rows(), eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<S: Float> Default for Mat4x4<S> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<S: Float> From<[[S; 4]; 4]> for Mat4x4<S> {
    /// Creates a matrix from an array of rows.
    #[inline]
    fn from([x, y, z, w]: [[S; 4]; 4]) -> Self {
        Self::new(x.into(), y.into(), z.into(), w.into())
    }
}

impl<S: Float> Mul for Mat4x4<S> {
    type Output = Self;

    /// Returns `self.then(&rhs)`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.then(&rhs)
    }
}

impl<S: Float> Mul<S> for Mat4x4<S> {
    type Output = Self;

    /// Multiplies each element of `self` by `rhs`.
    #[inline]
    fn mul(self, rhs: S) -> Self {
        let [x, y, z, w] = self.rows().map(|r| r * rhs);
        Self::new(x, y, z, w)
    }
}

impl<S: Debug> Debug for Mat4x4<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4x4[")?;
        for row in [&self.x_axis, &self.y_axis, &self.z_axis, &self.w_axis] {
            writeln!(f, "    {:6.2?}", row.0)?;
        }
        write!(f, "]")
    }
}
