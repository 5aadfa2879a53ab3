//! Linear algebra for 3D transforms.
//!
//! Includes [vectors][self::vec], [quaternions][quat], [matrices][mat],
//! [rotation–translation–scale triples][qvv], [angles][angle], and
//! [pseudo-random numbers][rand], as well as [approximate equality][approx]
//! comparisons.
//!
//! Every type is generic over a [`Float`] scalar, so the same code serves
//! both single and double precision. Converting between precisions is
//! always explicit, through the `cast` methods.

pub use {
    angle::{Angle, degs, rads},
    approx::ApproxEq,
    float::Float,
    mat::{
        Apply, Axis, Mat3x4, Mat4x4, orthographic, perspective, scale,
        translate,
    },
    quat::Quat,
    qvv::Qvv,
    vec::{Vec3, Vec4, Vector, splat, vec3, vec4},
};

pub mod angle;
pub mod approx;
pub mod float;
pub mod mat;
pub mod quat;
pub mod qvv;
pub mod rand;
pub mod vec;
