use std::env;

use rm::prelude::*;

/// Builds a transform from Euler angles given in degrees on the command
/// line, then decomposes its matrix back into rotation, translation, and
/// scale.
fn main() {
    let args: Vec<f32> = env::args()
        .skip(1)
        .map(|a| a.parse().unwrap_or_else(|e| panic!("{a:?}: {e}")))
        .collect();
    let [pitch, yaw, roll] = match args[..] {
        [p, y, r] => [p, y, r],
        [] => [30.0, 45.0, 60.0],
        _ => panic!("usage: qvv [PITCH YAW ROLL]"),
    };

    let qvv = Qvv::new(
        Quat::from_euler(degs(pitch), degs(yaw), degs(roll)),
        vec3(1.0, -2.0, 3.0),
        vec3(0.5, 1.0, 2.0),
    );
    println!("input:       {qvv:?}");

    let m = qvv.to_matrix();
    println!("matrix:      {m:?}");
    println!("determinant: {:.4}", m.determinant());

    let back = m.to_qvv();
    println!("decomposed:  {back:?}");

    // q and -q are the same rotation
    let same = back.rotation.dot(&qvv.rotation).abs();
    println!("|q · q'|:    {same:.6}");
    println!("matrices agree: {}", back.to_matrix().approx_eq(&m));

    let mirrored = scale(vec3(1.0, 1.0, -1.0)) * m;
    println!("mirrored:    {:?}", mirrored.to_qvv());
}
