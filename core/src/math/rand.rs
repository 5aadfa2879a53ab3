//! Pseudo-random number generation and probability distributions.
//!
//! Used to produce reproducible inputs for randomized tests and benchmarks.

use core::{array, marker::PhantomData, ops::Range};

use crate::math::float::Float;
use crate::math::quat::Quat;
use crate::math::vec::{Vec4, Vector};

//
// Traits and types
//

type DefaultRng = Xorshift64;

/// Trait for generating values sampled from a probability distribution.
pub trait Distrib<R = DefaultRng>: Clone {
    /// The type of the elements of the sample space of `Self`, also called
    /// "outcomes".
    type Sample;

    /// Returns a pseudo-random value sampled from `self`.
    fn sample(&self, rng: &mut R) -> Self::Sample;

    /// Returns an iterator that yields samples from `self`.
    fn iter(&self, rng: R) -> Iter<Self, R> {
        Iter(self.clone(), rng)
    }
}

/// A pseudo-random number generator (PRNG) that uses a [Xorshift algorithm][^1]
/// to generate 64 bits of randomness at a time, represented by a `u64`.
///
/// Xorshift is a type of linear-feedback shift register that uses only three
/// right-shifts and three xor operations per generated number, making it very
/// efficient. Xorshift64 has a period of 2<sup>64</sup>-1: it yields every
/// number in the interval [1, 2<sup>64</sup>) exactly once before repeating.
///
/// [^1]: Marsaglia, G. (2003). Xorshift RNGs. Journal of Statistical Software,
///     8(14), 1–6. <https://doi.org/10.18637/jss.v008.i14>
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(pub u64);

/// A uniform distribution of values in the given range.
#[derive(Clone, Debug)]
pub struct Uniform<T>(pub Range<T>);

/// A uniform distribution of unit quaternions, that is, of rotations.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitQuat<S = f32>(PhantomData<S>);

/// Iterator returned by the [Distrib::iter()] method.
pub struct Iter<D, R>(D, R);

//
// Inherent impls
//

impl Xorshift64 {
    /// A random 64-bit prime, used to initialize the generator returned by
    /// [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new `Xorshift64` seeded by the given number.
    ///
    /// Two `Xorshift64` instances generate the same sequence of pseudo-random
    /// numbers if and only if they were created with the same seed.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::rand::Xorshift64;
    /// let mut g = Xorshift64::from_seed(123);
    /// assert_eq!(g.next_bits(), 133101616827);
    /// assert_eq!(g.next_bits(), 12690785413091508870);
    /// assert_eq!(g.next_bits(), 7516749944291143043);
    /// ```
    ///
    /// # Panics
    ///
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns 64 bits of pseudo-randomness.
    ///
    /// Successive calls to this function (with the same `self`) will yield
    /// every value in the interval [1, 2<sup>64</sup>) exactly once before
    /// starting to repeat the sequence.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }
}

impl<S: Float> UnitQuat<S> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

//
// Foreign trait impls
//

impl<D: Distrib> Iterator for Iter<D, DefaultRng> {
    type Item = D::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.sample(&mut self.1))
    }
}

impl Default for Xorshift64 {
    /// Returns a `Xorshift64` seeded with [`Self::DEFAULT_SEED`].
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

//
// Local trait impls
//

impl Distrib for Uniform<f32> {
    type Sample = f32;

    /// Returns a uniformly distributed `f32` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f32 {
        let Range { start, end } = self.0;
        // Bit repr of a random f32 in range 1.0..2.0
        let bits = 127 << 23 | rng.next_bits() >> 41;
        let unit = f32::from_bits(bits as u32) - 1.0;
        unit * (end - start) + start
    }
}

impl Distrib for Uniform<f64> {
    type Sample = f64;

    /// Returns a uniformly distributed `f64` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f64 {
        let Range { start, end } = self.0;
        // Bit repr of a random f64 in range 1.0..2.0
        let bits = 1023 << 52 | rng.next_bits() >> 12;
        let unit = f64::from_bits(bits) - 1.0;
        unit * (end - start) + start
    }
}

impl<T, O, const N: usize> Distrib for Uniform<[T; N]>
where
    T: Copy,
    Uniform<T>: Distrib<Sample = O>,
{
    type Sample = [O; N];

    /// Returns an array of values that represents a uniformly distributed point
    /// within the N-dimensional rectangular volume bounded by `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> [O; N] {
        array::from_fn(|i| Uniform(self.0.start[i]..self.0.end[i]).sample(rng))
    }
}

impl<S, const N: usize> Distrib for Uniform<Vector<[S; N]>>
where
    S: Copy,
    Uniform<[S; N]>: Distrib<Sample = [S; N]>,
{
    type Sample = Vector<[S; N]>;

    /// Returns a uniformly distributed vector within the rectangular volume
    /// bounded by the range `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Self::Sample {
        Uniform(self.0.start.0..self.0.end.0).sample(rng).into()
    }
}

impl<S> Distrib for UnitQuat<S>
where
    S: Float,
    Uniform<[S; 4]>: Distrib<Sample = [S; 4]>,
{
    type Sample = Quat<S>;

    /// Returns a uniformly distributed unit quaternion.
    ///
    /// Samples the unit ball in four dimensions by rejection and projects
    /// the sample onto the unit sphere.
    fn sample(&self, rng: &mut DefaultRng) -> Quat<S> {
        let d = Uniform([-S::ONE; 4]..[S::ONE; 4]);
        let min_len_sqr = S::from_f64(1e-4);
        loop {
            let v = Vec4::from(d.sample(rng));
            let len_sqr = v.len_sqr();
            if min_len_sqr <= len_sqr && len_sqr <= S::ONE {
                let [x, y, z, w] = v.normalize().0;
                return Quat::new(x, y, z, w);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::manual_range_contains)]
mod tests {
    use core::ops::Add;

    use crate::assert_approx_eq;
    use crate::math::vec::{Vec3, splat, vec3};

    use super::*;

    const COUNT: usize = 1000;

    fn rng() -> DefaultRng {
        Default::default()
    }

    #[test]
    #[should_panic]
    fn zero_seed() {
        let _ = Xorshift64::from_seed(0);
    }

    #[test]
    fn uniform_f32() {
        let dist = Uniform(-1.23f32..4.56);
        for r in dist.iter(rng()).take(COUNT) {
            assert!(-1.23 <= r && r < 4.56);
        }
    }

    #[test]
    fn uniform_f64() {
        let dist = Uniform(-1e6f64..1e-6);
        for r in dist.iter(rng()).take(COUNT) {
            assert!(-1e6 <= r && r < 1e-6);
        }
    }

    #[test]
    fn uniform_f64_array() {
        let dist = Uniform([0.0f64, -10.0]..[10.0, 15.0]);
        for [x, y] in dist.iter(rng()).take(COUNT) {
            assert!(0.0 <= x && x < 10.0);
            assert!(-10.0 <= y && y < 15.0);
        }
    }

    #[test]
    fn uniform_vec3() {
        let dist = Uniform(vec3(-2.0f32, 0.0, -1.0)..vec3(1.0, 2.0, 3.0));

        let mean = dist
            .iter(rng())
            .take(COUNT)
            .inspect(|v| {
                assert!(-2.0 <= v.x() && v.x() < 1.0);
                assert!(0.0 <= v.y() && v.y() < 2.0);
                assert!(-1.0 <= v.z() && v.z() < 3.0);
            })
            .fold(splat(0.0), Add::add)
            / COUNT as f32;

        // Close to the center of the box
        assert_approx_eq!(mean, vec3(-0.5, 1.0, 1.0), eps = 0.1);
    }

    #[test]
    fn same_seed_same_samples() {
        let dist: Uniform<Vec3<f64>> = Uniform(splat(-1.0)..splat(1.0));
        let a = dist.sample(&mut Xorshift64::from_seed(42));
        let b = dist.sample(&mut Xorshift64::from_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn unit_quat() {
        for q in UnitQuat::<f64>::new().iter(rng()).take(COUNT) {
            assert_approx_eq!(q.len(), 1.0, "non-unit quaternion: {q:?}");
        }
        for q in UnitQuat::<f32>::default().iter(rng()).take(COUNT) {
            assert_approx_eq!(q.len(), 1.0, "non-unit quaternion: {q:?}");
        }
    }
}
