use {
    pose::{Dimensions, Joint, Keypoint2D, PoseFrame},
    spatial::{DepthEstimator, SpatialError},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn standing_frame(eye_score: f64) -> PoseFrame {
    PoseFrame::new(
        vec![
            Keypoint2D::new("leftEye", 300.0, 100.0, eye_score),
            Keypoint2D::new("rightEye", 340.0, 110.0, eye_score),
            Keypoint2D::new("leftHip", 300.0, 350.0, 0.9),
            Keypoint2D::new("leftHeel", 300.0, 590.0, 0.9),
            Keypoint2D::new("rightHeel", 340.0, 600.0, 0.9),
        ],
        Dimensions::new(640.0, 720.0),
    )
}

#[test]
fn test_depth_from_anchor_span() {
    let depths = DepthEstimator::default().estimate(&standing_frame(0.9));
    assert_eq!(depths.len(), 5);
    // 1000 px * 1.75 m / 500 px
    assert!(approx(depths[0], 3.5));
    assert!(approx(depths[1], 3.5 * (1.0 + 10.0 / 500.0 * 0.1)));
    assert!(approx(depths[2], 3.5 * 1.05));
    assert!(approx(depths[4], 3.5 * 1.1));
}

#[test]
fn test_low_confidence_anchors_give_zero_depth() {
    let frame = standing_frame(0.5);
    let depths = DepthEstimator::default().estimate(&frame);
    assert_eq!(depths, vec![0.0; 5]);

    match DepthEstimator::default().try_estimate(&frame) {
        Err(SpatialError::MissingAnchorKeypoints(missing)) => {
            assert_eq!(missing, vec![Joint::LeftEye, Joint::RightEye]);
        }
        other => panic!("Expected MissingAnchorKeypoints, got {:?}", other),
    }
}

#[test]
fn test_missing_heels_give_zero_depth() {
    let frame = PoseFrame::new(
        vec![
            Keypoint2D::new("leftEye", 300.0, 100.0, 0.9),
            Keypoint2D::new("rightEye", 340.0, 100.0, 0.9),
            Keypoint2D::new("leftHeel", 300.0, 600.0, 0.9),
        ],
        Dimensions::new(640.0, 720.0),
    );
    assert_eq!(DepthEstimator::default().estimate(&frame), vec![0.0; 3]);
}

#[test]
fn test_zero_span_is_degenerate() {
    let frame = PoseFrame::new(
        vec![
            Keypoint2D::new("leftEye", 0.0, 200.0, 0.9),
            Keypoint2D::new("rightEye", 10.0, 200.0, 0.9),
            Keypoint2D::new("leftHeel", 0.0, 200.0, 0.9),
            Keypoint2D::new("rightHeel", 10.0, 200.0, 0.9),
        ],
        Dimensions::new(640.0, 720.0),
    );
    let estimator = DepthEstimator::default();
    assert!(matches!(
        estimator.try_estimate(&frame),
        Err(SpatialError::DegenerateGeometry(_))
    ));
    assert_eq!(estimator.estimate(&frame), vec![0.0; 4]);
}
