use {
    base::Vec2,
    pose::{Dimensions, Joint, Keypoint2D, Keypoints2D, PoseFrame},
    spatial::{DepthEstimator, DepthLifter, lift_range_normalized},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn anchors() -> Keypoints2D {
    [
        (Joint::LeftEye, Vec2::new(0.0, 0.0)),
        (Joint::RightEye, Vec2::new(100.0, 0.0)),
        (Joint::LeftHeel, Vec2::new(0.0, 200.0)),
        (Joint::RightHeel, Vec2::new(100.0, 200.0)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_range_lift_depth_from_height() {
    let lifted = lift_range_normalized(&anchors());
    assert_eq!(lifted.len(), 4);
    let eye = lifted.get(Joint::RightEye).unwrap();
    assert_eq!((eye.x, eye.y, eye.z), (100.0, 0.0, 100.0));
    let heel = lifted.get(Joint::LeftHeel).unwrap();
    assert_eq!((heel.x, heel.y, heel.z), (0.0, 200.0, 0.0));
}

#[test]
fn test_range_lift_midpoint() {
    let mut points = anchors();
    points.insert(Joint::LeftHip, Vec2::new(50.0, 50.0));
    let hip = lift_range_normalized(&points).get(Joint::LeftHip).unwrap();
    assert!(approx(hip.z, 75.0));
}

#[test]
fn test_range_lift_flat_input() {
    let points: Keypoints2D = [
        (Joint::LeftEye, Vec2::new(0.0, 40.0)),
        (Joint::RightEye, Vec2::new(10.0, 40.0)),
    ]
    .into_iter()
    .collect();
    let lifted = lift_range_normalized(&points);
    assert!(lifted.iter().all(|(_, p)| p.z == 0.0 && p.y == 40.0));
    assert!(lift_range_normalized(&Keypoints2D::new()).is_empty());
}

fn camera_frame() -> PoseFrame {
    PoseFrame::new(
        vec![
            Keypoint2D::new("leftEye", 320.0, 100.0, 0.9),
            Keypoint2D::new("rightEye", 340.0, 100.0, 0.9),
            Keypoint2D::new("racket", 500.0, 300.0, 0.9),
            Keypoint2D::new("leftHeel", 320.0, 600.0, 0.9),
            Keypoint2D::new("rightHeel", 340.0, 600.0, 0.9),
        ],
        Dimensions::new(640.0, 720.0),
    )
}

#[test]
fn test_depth_lift_recenters_and_negates_depth() {
    let lifted = DepthLifter::default().lift(&camera_frame());
    assert_eq!(lifted.len(), 4);

    let eye = lifted.get(Joint::LeftEye).unwrap();
    assert!(approx(eye.x, 0.0));
    assert!(approx(eye.y, 260.0));
    assert!(approx(eye.z, -3.5));

    let heel = lifted.get(Joint::RightHeel).unwrap();
    assert!(approx(heel.x, 20.0));
    assert!(approx(heel.y, -240.0));
    assert!(approx(heel.z, -3.85));
}

#[test]
fn test_depth_lift_uses_configured_viewport() {
    let lifter = DepthLifter::new(DepthEstimator::default(), Some(Dimensions::new(1000.0, 1000.0)));
    let eye = lifter.lift(&camera_frame()).get(Joint::LeftEye).unwrap();
    assert!(approx(eye.x, -180.0));
    assert!(approx(eye.y, 400.0));
}

#[test]
fn test_depth_lift_without_anchors_has_zero_depth() {
    let frame = PoseFrame::new(
        vec![Keypoint2D::new("nose", 320.0, 360.0, 0.9)],
        Dimensions::new(640.0, 720.0),
    );
    let nose = DepthLifter::default().lift(&frame).get(Joint::Nose).unwrap();
    assert_eq!((nose.x, nose.y, nose.z), (0.0, 0.0, 0.0));
}
