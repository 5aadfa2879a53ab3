//! Core of the `rigmath` project: small fixed-size matrices for real-time
//! graphics and animation.
//!
//! Provides affine 3x4 and general 4x4 matrices over `f32` and `f64`, along
//! with the vectors, quaternions, and rotation–translation–scale triples
//! they are built from and decomposed into.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available the floating-point functions not included in `core`,
//!   in particular the trigonometric functions needed to construct
//!   rotations from angles. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! Without any of these, square roots use a fast approximation and
//! functions requiring trigonometry are unavailable; everything else,
//! including matrix inversion, works in any configuration.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod math;

pub mod prelude {
    pub use crate::math::{
        angle::{Angle, degs, rads},
        approx::ApproxEq,
        float::Float,
        mat::{
            Apply, Axis, Mat3x4, Mat4x4, orthographic, perspective, scale,
            translate,
        },
        quat::Quat,
        qvv::Qvv,
        rand::Distrib,
        vec::{Vec3, Vec4, Vector, splat, vec3, vec4},
    };
}
