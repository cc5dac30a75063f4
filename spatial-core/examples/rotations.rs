//! Walks through the rotation and projection API.
//!
//! Run with: RUST_LOG=spatial_core=trace cargo run --example rotations

use spatial_core::constants::HALF_PI;
use spatial_core::{GeometryResult, Quaternion, Vector3};
use tracing_subscriber::EnvFilter;

fn main() -> GeometryResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let v = Vector3::new(1.0, 0.0, 0.0);
    println!("{} rotated a quarter turn about z: {}", v, v.rotate_z(HALF_PI));

    let q = Quaternion::identity().rotate_z(HALF_PI)?.rotate_x(HALF_PI)?;
    println!("composed rotation {} maps x to {}", q, v.quaternion_rotate(&q));
    println!("as a matrix:\n{}", q.rotation_matrix());

    let p = Vector3::new(2.0, 3.0, 5.0);
    let (u, w) = p.project_2d(&Vector3::zeros(), &Vector3::z_axis(), &Vector3::y_axis());
    println!("{} in the xy-plane frame: ({:.6}, {:.6})", p, u, w);
    println!(
        "distance from the z axis: {:.6}",
        p.distance_from_line(&Vector3::zeros(), &Vector3::z_axis())
    );

    // Degenerate inputs: traced, not fatal for vectors
    println!("angle to zero vector: {}", v.angle_between(&Vector3::zeros()));
    if let Err(err) = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize() {
        println!("normalizing a zero quaternion: {}", err);
    }

    Ok(())
}
