//! Real vectors with a generic scalar type.
//!
//! Vectors are used both as directions and, in the case of 3-vectors
//! transformed by an affine matrix, as points. 4-vectors are the rows of
//! [`Mat4x4`][crate::math::mat::Mat4x4] and the homogeneous inputs and
//! outputs of projective transforms.

use core::array;
use core::fmt::{Debug, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut};
use core::ops::{Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;
use crate::math::float::Float;

/// A vector with `N` lanes of type `S`, represented by an array.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Vector<Repr>(pub Repr);

/// A 3-vector with scalar type `S`.
pub type Vec3<S = f32> = Vector<[S; 3]>;
/// A 4-vector with scalar type `S`.
pub type Vec4<S = f32> = Vector<[S; 4]>;

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<S>(x: S, y: S, z: S) -> Vec3<S> {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4<S>(x: S, y: S, z: S, w: S) -> Vec4<S> {
    Vector([x, y, z, w])
}

/// Returns a vector with all lanes equal to `s`.
///
/// # Examples
/// ```
/// use rigmath_core::math::vec::{splat, vec3, Vec3};
///
/// let v: Vec3 = splat(1.0);
/// assert_eq!(v, vec3(1.0, 1.0, 1.0));
/// ```
#[inline]
pub fn splat<S: Copy, const N: usize>(s: S) -> Vector<[S; N]> {
    Vector([s; N])
}

impl<S: Float, const N: usize> Vector<[S; N]> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        splat(S::ZERO)
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        let mut res = S::ZERO;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the length of `self`, squared.
    #[inline]
    pub fn len_sqr(&self) -> S {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> S {
        self.len_sqr().sqrt()
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The result is non-finite if `self` has zero length.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self * self.len_sqr().recip_sqrt()
    }

    /// Returns a vector with `f` applied to each lane of `self`.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Vector<[T; N]> {
        Vector(array::from_fn(|i| f(self.0[i])))
    }

    /// Converts each lane of `self` to another scalar type.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::vec::{vec3, Vec3};
    ///
    /// let v: Vec3<f64> = vec3(0.5f32, -1.0, 2.0).cast();
    /// assert_eq!(v, vec3(0.5, -1.0, 2.0));
    /// ```
    #[inline]
    pub fn cast<T: Float>(self) -> Vector<[T; N]> {
        self.map(S::cast)
    }
}

impl<S: Float> Vec3<S> {
    /// Unit vector along the x axis.
    pub const X: Self = vec3(S::ONE, S::ZERO, S::ZERO);
    /// Unit vector along the y axis.
    pub const Y: Self = vec3(S::ZERO, S::ONE, S::ZERO);
    /// Unit vector along the z axis.
    pub const Z: Self = vec3(S::ZERO, S::ZERO, S::ONE);

    #[inline]
    pub fn x(&self) -> S {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> S {
        self.0[1]
    }
    #[inline]
    pub fn z(&self) -> S {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both inputs and follows the right-hand
    /// rule: `X.cross(&Y) == Z`.
    pub fn cross(&self, other: &Self) -> Self {
        let x = self.y() * other.z() - self.z() * other.y();
        let y = self.z() * other.x() - self.x() * other.z();
        let z = self.x() * other.y() - self.y() * other.x();
        vec3(x, y, z)
    }

    /// Returns `self` extended with a fourth lane `w`.
    #[inline]
    pub fn to_vec4(self, w: S) -> Vec4<S> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }
}

impl<S: Float> Vec4<S> {
    #[inline]
    pub fn x(&self) -> S {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> S {
        self.0[1]
    }
    #[inline]
    pub fn z(&self) -> S {
        self.0[2]
    }
    #[inline]
    pub fn w(&self) -> S {
        self.0[3]
    }

    /// Returns the first three lanes of `self`, dropping `w`.
    #[inline]
    pub fn xyz(&self) -> Vec3<S> {
        vec3(self.x(), self.y(), self.z())
    }

    /// Returns `self` with its `w` lane replaced.
    #[inline]
    #[must_use]
    pub fn with_w(mut self, w: S) -> Self {
        self.0[3] = w;
        self
    }
}

//
// Local trait impls
//

impl<S: Float, const N: usize> ApproxEq<Self, S> for Vector<[S; N]> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<S: Debug, const N: usize> Debug for Vector<[S; N]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec{N}{:?}", self.0)
    }
}

impl<S, const N: usize> From<[S; N]> for Vector<[S; N]> {
    #[inline]
    fn from(els: [S; N]) -> Self {
        Self(els)
    }
}

impl<S, const N: usize> Index<usize> for Vector<[S; N]> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.0[i]
    }
}

impl<S, const N: usize> IndexMut<usize> for Vector<[S; N]> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        &mut self.0[i]
    }
}

impl<S: Float, const N: usize> AddAssign for Vector<[S; N]> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<S: Float, const N: usize> SubAssign for Vector<[S; N]> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<S: Float, const N: usize> MulAssign<S> for Vector<[S; N]> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        for i in 0..N {
            self.0[i] *= rhs;
        }
    }
}

impl<S: Float, const N: usize> DivAssign<S> for Vector<[S; N]> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        for i in 0..N {
            self.0[i] /= rhs;
        }
    }
}

impl<S: Float, const N: usize> Neg for Vector<[S; N]> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(S::neg)
    }
}

/// Implements an operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $rhs:ty, $op:tt) => {
        impl<S: Float, const N: usize> $trait<$rhs> for Vector<[S; N]> {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs; self
            }
        }
    };
}

impl_op!(Add::add, Vector<[S; N]>, +=);
impl_op!(Sub::sub, Vector<[S; N]>, -=);
impl_op!(Mul::mul, S, *=);
impl_op!(Div::div, S, /=);
