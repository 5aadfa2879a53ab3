use rm::prelude::*;

/// Inverts a few matrices in both shapes and precisions, and shows the
/// fallback taken for singular ones.
fn main() {
    let m: Mat3x4 = Mat3x4::from_qvv(
        &Quat::from_euler(degs(10.0), degs(20.0), degs(30.0)),
        vec3(4.0, 5.0, 6.0),
        vec3(2.0, 3.0, 0.5),
    );
    let inv = m.inverse();
    println!("m:        {m:?}");
    println!("m⁻¹:      {inv:?}");
    println!("m * m⁻¹:  {:?}", m * inv);

    let wide: Mat4x4<f64> = Mat4x4::from(m).cast();
    println!("as 4x4 f64, det = {:.6}", wide.determinant());
    println!("m⁻¹ (4x4): {:?}", wide.inverse());

    let proj: Mat4x4 = perspective(1.0, 4.0 / 3.0, 0.1..100.0);
    println!("projection:   {proj:?}");
    println!("projection⁻¹: {:?}", proj.inverse());

    let flat: Mat3x4 = scale(vec3(1.0, 1.0, 0.0));
    println!("singular, det = {}", flat.determinant());
    println!("try_inverse:  {:?}", flat.try_inverse(1e-8));
    println!("inverse_or:   {:?}", flat.inverse_or(Mat3x4::IDENTITY));
}
