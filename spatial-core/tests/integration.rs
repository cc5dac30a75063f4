use spatial_core::assert_ulp_lt;
use spatial_core::constants::{DEFAULT_TOLERANCE, HALF_PI, PI};
use spatial_core::test_helpers::{assert_quat_close, assert_vec_close};
use spatial_core::{
    AffineTransform3, GeometryError, MathErrorKind, Quaternion, QuaternionRecord, Vector3,
    VectorRecord,
};

// --- Reference scenarios ---

#[test]
fn test_rotate_x_axis_about_z() {
    let v = Vector3::new(1.0, 0.0, 0.0).rotate_z(HALF_PI);
    assert_vec_close(v, Vector3::new(0.0, 1.0, 0.0), DEFAULT_TOLERANCE);
}

#[test]
fn test_cross_product() {
    let c = Vector3::new(1.0, 2.0, 3.0).cross(&Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(c, Vector3::new(-3.0, 6.0, -3.0));
}

#[test]
fn test_magnitude_345() {
    assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
}

#[test]
fn test_identity_times_i() {
    let p = Quaternion::new(1.0, 0.0, 0.0, 0.0).multiply(&Quaternion::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(p, Quaternion::new(0.0, 1.0, 0.0, 0.0));
}

#[test]
fn test_distance_from_x_axis() {
    let d = Vector3::new(0.0, 0.0, 1.0)
        .distance_from_line(&Vector3::zeros(), &Vector3::new(1.0, 0.0, 0.0));
    assert_ulp_lt!(d, 1.0, 2);
}

#[test]
fn test_zero_quaternion_normalize_fails() {
    let err = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize().unwrap_err();
    assert!(err.is_division_by_zero());
}

// --- Constructors ---

#[test]
fn test_vector_from_partial_record() {
    let v = Vector3::from(VectorRecord {
        x: 1.0,
        y: 2.0,
        z: None,
    });
    assert_eq!(v, Vector3::new(1.0, 2.0, 0.0));
    assert_eq!(Vector3::from_record(VectorRecord::default()), Vector3::zeros());
}

#[test]
fn test_vector_from_slice_missing_y() {
    match Vector3::from_slice(&[4.0]) {
        Err(GeometryError::MissingArgument { missing, .. }) => assert_eq!(missing, "y"),
        other => panic!("expected MissingArgument, got {:?}", other),
    }
}

#[test]
fn test_quaternion_from_slice_reports_missing_parts() {
    match Quaternion::from_slice(&[1.0]) {
        Err(GeometryError::MissingArgument { missing, .. }) => assert_eq!(missing, "i, j, k"),
        other => panic!("expected MissingArgument, got {:?}", other),
    }
    match Quaternion::from_slice(&[1.0, 2.0, 3.0]) {
        Err(GeometryError::MissingArgument { missing, .. }) => assert_eq!(missing, "k"),
        other => panic!("expected MissingArgument, got {:?}", other),
    }
}

#[test]
fn test_too_many_components() {
    let err = Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::MathError {
            kind: MathErrorKind::InvalidInput,
            ..
        }
    ));
}

#[test]
fn test_quaternion_from_record() {
    let record = QuaternionRecord {
        a: 0.5,
        i: -0.5,
        j: 0.5,
        k: -0.5,
    };
    assert_eq!(Quaternion::from(record), Quaternion::new(0.5, -0.5, 0.5, -0.5));
    assert_eq!(Quaternion::from_record(record).magnitude(), 1.0);
}

// --- Rotations ---

#[test]
fn test_rotation_paths_agree() {
    let axis = Vector3::new(1.0, -2.0, 0.5);
    let angle = 1.1;
    let v = Vector3::new(0.3, 4.0, -2.5);

    let q = Quaternion::from_axis_angle(&axis, angle);
    let by_axis = v.rotate_axis(&axis, angle);
    let by_quaternion = v.quaternion_rotate(&q);
    let by_matrix = q.rotation_matrix() * v;
    let by_affine = v.transform(&AffineTransform3::from(q.rotation_matrix()));

    assert_vec_close(by_axis, by_quaternion, 1e-14);
    assert_vec_close(by_matrix, by_quaternion, 1e-14);
    assert_vec_close(by_affine, by_quaternion, 1e-14);
}

#[test]
fn test_composed_quaternion_rotation() {
    // z quarter turn, then x quarter turn: x -> y -> z
    let q = Quaternion::identity()
        .rotate_z(HALF_PI)
        .and_then(|q| q.rotate_x(HALF_PI))
        .unwrap();
    let v = Vector3::x_axis().quaternion_rotate(&q);
    assert_vec_close(v, Vector3::z_axis(), 1e-14);
}

#[test]
fn test_half_turn_reverses() {
    let v = Vector3::new(1.0, 2.0, 0.0).rotate_z(PI);
    assert_vec_close(v, Vector3::new(-1.0, -2.0, 0.0), 1e-14);
}

#[test]
fn test_matrix_round_trip() {
    let q = Quaternion::from_axis_angle(&Vector3::new(0.2, 0.7, -0.4), 2.3);
    let back = Quaternion::from_rotation_matrix(&q.rotation_matrix());
    let back = if back.dot(&q) < 0.0 { -back } else { back };
    assert_quat_close(back, q, 1e-14);
}

#[test]
fn test_rotate_by_zero_quaternion_fails() {
    let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert!(Quaternion::identity().rotate(&zero).unwrap_err().is_division_by_zero());
    assert!(zero.rotate_x(1.0).unwrap_err().is_division_by_zero());
    assert!(zero.inverse().unwrap_err().is_division_by_zero());
}

// --- Projections ---

#[test]
fn test_planar_project_onto_offset_plane() {
    let p = Vector3::new(1.0, 2.0, 7.0);
    let on_plane = p.planar_project(&Vector3::new(0.0, 0.0, 3.0), &Vector3::z_axis());
    assert_vec_close(on_plane, Vector3::new(1.0, 2.0, 3.0), 1e-14);
}

#[test]
fn test_project_2d_uses_rotated_y_axis() {
    let (x, y) = Vector3::new(2.0, 3.0, 5.0).project_2d(
        &Vector3::zeros(),
        &Vector3::z_axis(),
        &Vector3::y_axis(),
    );
    assert!((x + 2.0).abs() < 1e-14);
    assert!((y - 3.0).abs() < 1e-14);
}

#[test]
fn test_angle_between_opposites() {
    let v = Vector3::new(-1.0, 4.0, 2.0);
    assert_eq!(v.angle_between(&v), 0.0);
    assert_ulp_lt!(v.angle_between(&-v), PI, 1);
    assert_eq!(v.angle_between(&Vector3::zeros()), 0.0);
}

#[test]
fn test_angle_and_projection_at_large_scale() {
    let v = Vector3::new(1e100, 0.0, 0.0);
    assert_eq!(v.angle_between(&-v), PI);

    let tiny = Vector3::new(1e-100, 0.0, 0.0);
    assert_eq!(tiny.angle_between(&-tiny), PI);

    let p = Vector3::new(3e100, 4e100, 0.0).project(&v);
    assert!((p.x / 3e100 - 1.0).abs() < 1e-14);
}

#[test]
fn test_degenerate_rotation_and_line() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.rotate_axis(&Vector3::zeros(), 0.7), v);

    let a = Vector3::new(2.0, 2.0, 2.0);
    assert_eq!(v.distance_from_line(&a, &a), 0.0);
}
