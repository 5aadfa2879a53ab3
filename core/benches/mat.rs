//! Matrix composition, inversion, and decomposition benchmarks.

use divan::Bencher;
use divan::counter::ItemsCount;
use rigmath_core::{
    math::rand::{Distrib, Uniform, UnitQuat, Xorshift64},
    math::{Mat3x4, Mat4x4, Vec3, splat},
};

fn random_affine(rng: &mut Xorshift64) -> Mat3x4 {
    let translations: Uniform<Vec3> = Uniform(splat(-1e3)..splat(1e3));
    let scales: Uniform<Vec3> = Uniform(splat(0.1)..splat(10.0));
    Mat3x4::from_qvv(
        &UnitQuat::<f32>::new().sample(rng),
        translations.sample(rng),
        scales.sample(rng),
    )
}

#[divan::bench]
fn compose_3x4(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| (random_affine(rng), random_affine(rng)))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|(m, n)| m * n);
}

#[divan::bench]
fn compose_4x4(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| {
        let m = Mat4x4::from(random_affine(rng));
        (m, m.transpose())
    })
    .input_counter(|_| ItemsCount::new(1u32))
    .bench_local_values(|(m, n)| m * n);
}

#[divan::bench]
fn determinant_3x4(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| random_affine(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m| m.determinant());
}

#[divan::bench]
fn determinant_4x4(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| Mat4x4::from(random_affine(rng)).transpose())
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m| m.determinant());
}

#[divan::bench]
fn inverse_3x4(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| random_affine(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m| m.inverse());
}

#[divan::bench]
fn inverse_4x4(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| Mat4x4::from(random_affine(rng)).transpose())
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m| m.inverse_or(Mat4x4::IDENTITY));
}

#[divan::bench]
fn from_qvv(b: Bencher) {
    let rng = &mut Xorshift64::default();
    let vecs: Uniform<Vec3> = Uniform(splat(-1e3)..splat(1e3));

    b.with_inputs(|| {
        let q = UnitQuat::<f32>::new().sample(rng);
        (q, vecs.sample(rng), vecs.sample(rng))
    })
    .input_counter(|_| ItemsCount::new(1u32))
    .bench_local_values(|(q, t, s)| Mat3x4::from_qvv(&q, t, s));
}

#[divan::bench]
fn to_qvv(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| random_affine(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m| m.to_qvv());
}

fn main() {
    divan::main()
}
