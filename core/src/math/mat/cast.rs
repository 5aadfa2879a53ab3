//! Conversions between the affine and general matrix shapes.
//!
//! Shape conversions only move lanes; like the per-precision `cast`
//! methods they perform no arithmetic, so converting shape and precision
//! in either order gives identical results.

use crate::math::float::Float;
use crate::math::mat::{Mat3x4, Mat4x4};

impl<S: Float> From<Mat3x4<S>> for Mat4x4<S> {
    /// Extends an affine matrix with the homogeneous column `[0, 0, 0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::{mat::{translate, Mat4x4}, vec::{vec3, vec4}};
    ///
    /// let m = Mat4x4::from(translate(vec3(1.0f32, 2.0, 3.0)));
    /// assert_eq!(m.x_axis, vec4(1.0, 0.0, 0.0, 0.0));
    /// assert_eq!(m.w_axis, vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    fn from(m: Mat3x4<S>) -> Self {
        Self::new(
            m.x_axis.to_vec4(S::ZERO),
            m.y_axis.to_vec4(S::ZERO),
            m.z_axis.to_vec4(S::ZERO),
            m.w_axis.to_vec4(S::ONE),
        )
    }
}

impl<S: Float> Mat4x4<S> {
    /// Returns the affine part of `self`, dropping the last column.
    ///
    /// Only meaningful if the last column of `self` is `[0, 0, 0, 1]`;
    /// otherwise the projective part of the transform is lost.
    pub fn to_affine(&self) -> Mat3x4<S> {
        Mat3x4::new(
            self.x_axis.xyz(),
            self.y_axis.xyz(),
            self.z_axis.xyz(),
            self.w_axis.xyz(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::mat::{perspective, scale, translate};
    use crate::math::quat::Quat;
    use crate::math::rand::{Distrib, Uniform, Xorshift64};
    use crate::math::vec::{Vec3, splat, vec3, vec4};

    use super::*;

    fn random_affine(rng: &mut Xorshift64) -> Mat3x4<f64> {
        let els: Uniform<Vec3<f64>> = Uniform(splat(-100.0)..splat(100.0));
        let [x, y, z, w] = [(); 4].map(|_| els.sample(rng));
        Mat3x4::new(x, y, z, w)
    }

    #[test]
    fn affine_to_general_and_back() {
        let m = scale(vec3(2.0f32, 3.0, 4.0)).then(&translate(vec3(1.0, 2.0, 3.0)));
        let g = Mat4x4::from(m);

        assert_eq!(g.z_axis, vec4(0.0, 0.0, 4.0, 0.0));
        assert_eq!(g.w_axis, vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(g.to_affine(), m);
    }

    #[test]
    fn to_affine_drops_projection() {
        let p = perspective(1.0f64, 1.0, 1.0..2.0);
        let a = p.to_affine();
        assert_eq!(a.z_axis, p.z_axis.xyz());
        assert_ne!(Mat4x4::from(a), p);
    }

    #[test]
    fn operations_agree_across_shapes() {
        let q = Quat::new(0.5f64, 0.5, -0.5, 0.5);
        let a = Mat3x4::from_qvv(&q, vec3(1.0, -2.0, 3.0), vec3(1.0, 2.0, 3.0));
        let b = translate(vec3(0.0, 4.0, 0.0)).then(&scale(vec3(2.0, 1.0, 1.0)));
        let (ga, gb) = (Mat4x4::from(a), Mat4x4::from(b));

        assert_approx_eq!(Mat4x4::from(a * b), ga * gb, eps = 1e-10);
        assert_approx_eq!(Mat4x4::from(a.inverse()), ga.inverse(), eps = 1e-10);
        assert_approx_eq!(a.determinant(), ga.determinant(), eps = 1e-10);

        let p = vec3(3.0, 0.5, -1.0);
        assert_approx_eq!(ga.mul_vector(&p.to_vec4(1.0)).xyz(), a.transform_point(&p));
        assert_approx_eq!(ga.mul_vector(&p.to_vec4(0.0)).xyz(), a.transform_vector(&p));
    }

    #[test]
    fn precision_and_shape_casts_commute() {
        let rng = &mut Xorshift64::default();
        for _ in 0..100 {
            let m = random_affine(rng);

            let narrow_first = Mat4x4::from(m.cast::<f32>());
            let shape_first = Mat4x4::from(m).cast::<f32>();
            assert_eq!(narrow_first, shape_first);

            let g = Mat4x4::from(m);
            assert_eq!(g.to_affine().cast::<f32>(), g.cast::<f32>().to_affine());
        }
    }

    #[test]
    fn precision_round_trip() {
        let rng = &mut Xorshift64::default();
        for _ in 0..100 {
            let m = random_affine(rng);
            let g = Mat4x4::from(m);

            // Absolute error, lanes range up to 100 in magnitude
            let back = g.cast::<f32>().cast::<f64>();
            let rows = |m: Mat4x4<f64>| [m.x_axis, m.y_axis, m.z_axis, m.w_axis];
            for (r, s) in rows(back).iter().zip(rows(g)) {
                for (x, y) in r.0.iter().zip(s.0) {
                    assert!((x - y).abs() < 1e-4, "{back:?}\n{g:?}");
                }
            }
            assert_eq!(Mat4x4::from(m.cast::<f32>().cast::<f64>()), back);

            let n = m.cast::<f32>();
            assert_eq!(n.cast::<f64>().cast::<f32>(), n);
        }
    }
}
