//! Floating-point scalars and compatibility API.
//!
//! Every vector, quaternion, and matrix type in this crate is generic over
//! a [`Float`] scalar, implemented for `f32` and `f64`.
//!
//! Most floating-point functions are currently unavailable in `no_std`.
//! This module provides the missing functions using either the `libm` or
//! `micromath` crate, depending on which feature is enabled. As a fallback,
//! it also implements a critical subset of the functions even if none of
//! the features is enabled.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg};
use core::ops::{Sub, SubAssign};

use crate::math::approx::ApproxEq;

#[cfg(feature = "libm")]
pub mod libm {
    pub mod f32 {
        pub use libm::fabsf as abs;
        pub use libm::sqrtf as sqrt;

        #[inline]
        pub fn sin_cos(x: f32) -> (f32, f32) {
            (libm::sinf(x), libm::cosf(x))
        }
    }
    pub mod f64 {
        pub use libm::fabs as abs;
        pub use libm::sqrt;

        #[inline]
        pub fn sin_cos(x: f64) -> (f64, f64) {
            (libm::sin(x), libm::cos(x))
        }
    }
}

#[cfg(feature = "mm")]
pub mod mm {
    pub mod f32 {
        use micromath::F32Ext as mm;

        #[inline]
        pub fn abs(x: f32) -> f32 {
            mm::abs(x)
        }
        /// Returns the approximate square root of `x`.
        #[inline]
        pub fn sqrt(x: f32) -> f32 {
            let y = mm::sqrt(x);
            // Two rounds of Newton's method
            let y = 0.5 * (y + (x / y));
            0.5 * (y + (x / y))
        }
        #[inline]
        pub fn sin_cos(x: f32) -> (f32, f32) {
            (mm::sin(x), mm::cos(x))
        }
    }
    /// Micromath only supports `f32`; `f64` values are narrowed, computed
    /// on, and widened back, except where an exact `f64` version is cheap.
    pub mod f64 {
        #[inline]
        pub fn abs(x: f64) -> f64 {
            super::super::fallback::f64::abs(x)
        }
        #[inline]
        pub fn sqrt(x: f64) -> f64 {
            super::super::fallback::f64::sqrt(x)
        }
        #[inline]
        pub fn sin_cos(x: f64) -> (f64, f64) {
            let (s, c) = super::f32::sin_cos(x as f32);
            (s as f64, c as f64)
        }
    }
}

pub mod fallback {
    pub mod f32 {
        use crate::math::float::fast_recip_sqrt;

        /// Returns the absolute value of `x`.
        #[inline]
        pub fn abs(x: f32) -> f32 {
            f32::from_bits(x.to_bits() & !(1 << 31))
        }
        /// Returns the approximate square root of `x`.
        #[inline]
        pub fn sqrt(x: f32) -> f32 {
            1.0 / fast_recip_sqrt(x)
        }
    }
    pub mod f64 {
        use crate::math::float::fast_recip_sqrt;

        /// Returns the absolute value of `x`.
        #[inline]
        pub fn abs(x: f64) -> f64 {
            f64::from_bits(x.to_bits() & !(1 << 63))
        }
        /// Returns the square root of `x`, refined from an `f32` estimate.
        #[inline]
        pub fn sqrt(x: f64) -> f64 {
            if x == 0.0 {
                return x;
            }
            let mut y = fast_recip_sqrt(x as f32) as f64;
            // Three rounds of Newton's method
            for _ in 0..3 {
                y *= 1.5 - 0.5 * x * y * y;
            }
            x * y
        }
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
#[inline]
pub fn fast_recip_sqrt(x: f32) -> f32 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u32 = 0x5f37_5a86;
    let bits = MAGIC.saturating_sub(x.to_bits() >> 1);
    let y = core::primitive::f32::from_bits(bits);
    // A round of Newton's method
    y * (1.5 - 0.5 * x * y * y)
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;
#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use self::libm::{f32, f64};

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use self::mm::{f32, f64};

#[cfg(not(feature = "fp"))]
pub use self::fallback::{f32, f64};

/// Trait for the real scalar types that vectors and matrices are built on.
///
/// Implemented for `f32` and `f64`. Conversions between the two go through
/// [`cast`][Self::cast], which widens exactly or narrows with the target
/// type's ordinary round-to-nearest.
pub trait Float:
    Copy
    + Default
    + Debug
    + PartialOrd
    + ApproxEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    /// Determinants with an absolute value less than this are treated
    /// as zero when inverting matrices.
    const INVERSE_THRESHOLD: Self;

    fn from_f64(x: core::primitive::f64) -> Self;
    fn to_f64(self) -> core::primitive::f64;

    /// Converts `self` to another scalar type.
    ///
    /// # Examples
    /// ```
    /// use rigmath_core::math::float::Float;
    ///
    /// assert_eq!(0.5f32.cast::<f64>(), 0.5);
    /// assert_eq!(0.1f64.cast::<f32>(), 0.1f32);
    /// ```
    #[inline]
    fn cast<T: Float>(self) -> T {
        T::from_f64(self.to_f64())
    }

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;

    #[inline]
    fn recip(self) -> Self {
        Self::ONE / self
    }
    #[inline]
    fn recip_sqrt(self) -> Self {
        self.sqrt().recip()
    }

    /// Simultaneously computes the sine and cosine of `self` radians.
    #[cfg(feature = "fp")]
    fn sin_cos(self) -> (Self, Self);
}

macro_rules! impl_float {
    ($ty:ident, threshold = $thr:literal) => {
        impl Float for core::primitive::$ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$ty::consts::PI;
            const INVERSE_THRESHOLD: Self = $thr;

            #[inline]
            fn from_f64(x: core::primitive::f64) -> Self {
                x as Self
            }
            #[inline]
            fn to_f64(self) -> core::primitive::f64 {
                self as core::primitive::f64
            }
            #[inline]
            fn abs(self) -> Self {
                $ty::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $ty::sin_cos(self)
            }
        }
    };
}

impl_float!(f32, threshold = 1.0e-8);
impl_float!(f64, threshold = 1.0e-8);
