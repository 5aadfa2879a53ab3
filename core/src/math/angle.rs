//! Angular quantities.

use core::fmt::{self, Debug, Display};
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;
use crate::math::float::Float;

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw scalar value.
#[derive(Copy, Clone, Default, PartialEq)]
#[repr(transparent)]
pub struct Angle<S = f32>(S);

/// Returns an angle of `a` radians.
#[inline]
pub fn rads<S: Float>(a: S) -> Angle<S> {
    Angle(a)
}

/// Returns an angle of `a` degrees.
///
/// # Examples
/// ```
/// # use rigmath_core::assert_approx_eq;
/// use rigmath_core::math::angle::{degs, rads};
///
/// assert_approx_eq!(degs(180.0f64), rads(core::f64::consts::PI));
/// ```
#[inline]
pub fn degs<S: Float>(a: S) -> Angle<S> {
    Angle(a * rads_per_deg())
}

#[inline]
fn rads_per_deg<S: Float>() -> S {
    S::PI / S::from_f64(180.0)
}

impl<S: Float> Angle<S> {
    /// A zero angle.
    pub const ZERO: Self = Self(S::ZERO);

    /// Returns the value of `self` in radians.
    #[inline]
    pub fn to_rads(self) -> S {
        self.0
    }
    /// Returns the value of `self` in degrees.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::angle::rads;
    ///
    /// assert_approx_eq!(rads(core::f32::consts::FRAC_PI_2).to_degs(), 90.0);
    /// ```
    #[inline]
    pub fn to_degs(self) -> S {
        self.0 / rads_per_deg()
    }

    /// Converts `self` to another scalar type.
    #[inline]
    pub fn cast<T: Float>(self) -> Angle<T> {
        Angle(self.0.cast())
    }
}

#[cfg(feature = "fp")]
impl<S: Float> Angle<S> {
    /// Simultaneously computes the sine and cosine of `self`.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// use rigmath_core::math::angle::degs;
    ///
    /// let (sin, cos) = degs(90.0f32).sin_cos();
    /// assert_approx_eq!(sin, 1.0);
    /// assert_approx_eq!(cos, 0.0);
    /// ```
    #[inline]
    pub fn sin_cos(self) -> (S, S) {
        self.0.sin_cos()
    }
}

impl<S: Float> ApproxEq<Self, S> for Angle<S> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}

impl<S: Float + Display> Display for Angle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl<S: Float + Display> Debug for Angle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl<S: Float> Add for Angle<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl<S: Float> Sub for Angle<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl<S: Float> Neg for Angle<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl<S: Float> Mul<S> for Angle<S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn rads_to_degs() {
        assert_approx_eq!(rads(PI).to_degs(), 180.0);
        assert_approx_eq!(rads(-FRAC_PI_2).to_degs(), -90.0);
    }

    #[test]
    fn degs_to_rads() {
        assert_approx_eq!(degs(90.0f32).to_rads(), FRAC_PI_2);
        assert_approx_eq!(
            degs(90.0f64).to_rads(),
            core::f64::consts::FRAC_PI_2
        );
    }

    #[test]
    fn arithmetic() {
        assert_approx_eq!(degs(30.0f32) + degs(60.0), degs(90.0));
        assert_approx_eq!(degs(30.0f32) - degs(60.0), -degs(30.0));
        assert_approx_eq!(degs(30.0f32) * 3.0, degs(90.0));
    }

    #[test]
    fn cast() {
        assert_approx_eq!(degs(45.0f32).cast::<f64>(), degs(45.0), eps = 1e-6);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(alloc::format!("{:.1}", degs(45.0f64)), "45.0°");
        assert_eq!(alloc::format!("{:?}", Angle::<f64>::ZERO), "Angle(0°)");
    }

    #[cfg(feature = "fp")]
    #[test]
    fn sin_cos() {
        let (s, c) = degs(30.0f64).sin_cos();
        assert_approx_eq!(s, 0.5);
        assert_approx_eq!(c, Float::sqrt(0.75f64));
    }
}
