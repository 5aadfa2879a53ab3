use rm::prelude::*;

/// Projects the corners of a rotating cube to normalized device
/// coordinates, printing them for a few animation frames.
fn main() {
    let proj = perspective(1.0, 16.0 / 9.0, 0.5..50.0);
    let view = translate(vec3(0.0, 0.0, 5.0));

    let corners: Vec<Vec3<f32>> = (0..8)
        .map(|i| {
            let c = |bit| if i & bit == 0 { -1.0 } else { 1.0 };
            vec3(c(1), c(2), c(4))
        })
        .collect();

    for frame in 0..4 {
        let t = frame as f32 * 15.0;
        let model =
            Mat3x4::from_quat(&Quat::from_euler(degs(t), degs(2.0 * t), degs(0.0)));
        let mvp = Mat4x4::from(model * view) * proj;

        println!("frame {frame}, yaw {}:", degs(2.0 * t));
        for c in &corners {
            let clip = mvp.apply(&c.to_vec4(1.0));
            let ndc = clip.xyz() / clip.w();
            println!("  {c:?} -> {ndc:?}");
        }
    }

    // Unprojecting the center of the near plane recovers the view position
    let inv = (Mat4x4::from(view) * proj).inverse();
    let p = inv.apply(&vec4(0.0, 0.0, -1.0, 1.0));
    println!("near center in world space: {:?}", p.xyz() / p.w());
}
