use base::Vec3;

#[test]
fn test_new_and_fields() {
    let v = Vec3::new(1.0_f64, 2.0, 3.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
    assert_eq!(v.z, 3.0);
}

#[test]
fn test_sub_and_length() {
    let a = Vec3::new(4.0, 6.0, 3.0);
    let b = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!((a - b).length(), 5.0);
    assert_eq!(a.distance_to(b), 5.0);
}

#[test]
fn test_midpoint() {
    let m = Vec3::new(0.0, 0.0, 100.0).midpoint(Vec3::new(100.0, 0.0, 0.0));
    assert_eq!(m, Vec3::new(50.0, 0.0, 50.0));
}

#[test]
fn test_blend_weights_self() {
    let previous = Vec3::new(10.0, 0.0, 0.0);
    let current = Vec3::new(0.0, 10.0, 0.0);
    let r = previous.blend(current, 0.8);
    assert!((r.x - 8.0).abs() < 1e-12);
    assert!((r.y - 2.0).abs() < 1e-12);
}

#[test]
fn test_angle_to() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 2.0, 0.0);
    let angle = a.angle_to(b).unwrap();
    assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!(a.angle_to(Vec3::zero()).is_none());
}

#[test]
fn test_mul_assign_scalar() {
    let mut v = Vec3::new(1.0, -2.0, 3.0);
    v *= 2.0;
    assert_eq!(v, Vec3::new(2.0, -4.0, 6.0));
}

#[test]
fn test_serde_shape() {
    let json = serde_json::to_string(&Vec3::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
}
