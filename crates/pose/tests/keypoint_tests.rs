use pose::{Dimensions, Joint, JointKind, Keypoint2D, PoseFrame, Side};

#[test]
fn test_joint_names_round_trip() {
    for joint in Joint::ALL {
        assert_eq!(Joint::from_name(joint.name()), Some(joint));
    }
}

#[test]
fn test_unknown_joint_name() {
    assert_eq!(Joint::from_name("leftAntenna"), None);
    assert_eq!(Joint::from_name("LeftShoulder"), None);
    assert!(Joint::try_from("tail").is_err());
    assert_eq!(Joint::try_from("rightHeel").unwrap(), Joint::RightHeel);
}

#[test]
fn test_joint_kind_and_side() {
    assert_eq!(Joint::LeftHeel.kind(), JointKind::Heel);
    assert_eq!(Joint::RightEye.kind(), JointKind::Eye);
    assert_eq!(Joint::LeftWrist.side(), Side::Left);
    assert_eq!(Joint::RightFootIndex.side(), Side::Right);
    assert_eq!(Joint::Nose.side(), Side::Center);
}

#[test]
fn test_frame_of_kind_keeps_frame_order() {
    let frame = PoseFrame::new(
        vec![
            Keypoint2D::new("rightShoulder", 160.0, 100.0, 0.9),
            Keypoint2D::new("leftHip", 110.0, 200.0, 0.9),
            Keypoint2D::new("leftShoulder", 100.0, 100.0, 0.4),
        ],
        Dimensions::new(640.0, 480.0),
    );
    let shoulders = frame.of_kind(JointKind::Shoulder);
    assert_eq!(shoulders.len(), 2);
    assert_eq!(shoulders[0].name, "rightShoulder");
    assert_eq!(shoulders[1].name, "leftShoulder");

    let confident = frame.confident_of_kind(JointKind::Shoulder, 0.5);
    assert_eq!(confident.len(), 1);
    assert_eq!(frame.keypoint(Joint::LeftHip).map(|kp| kp.x), Some(110.0));
}

#[test]
fn test_to_keypoints2d_drops_unknown_names() {
    let frame = PoseFrame::new(
        vec![
            Keypoint2D::new("leftEye", 10.0, 20.0, 0.9),
            Keypoint2D::new("mystery", 1.0, 1.0, 0.9),
        ],
        Dimensions::new(100.0, 100.0),
    );
    let points = frame.to_keypoints2d();
    assert_eq!(points.len(), 1);
    assert_eq!(points[&Joint::LeftEye].y, 20.0);
}

#[test]
fn test_frame_from_json() {
    let json = r#"{
        "keypoints": [
            {"x": 1.0, "y": 2.0, "score": 0.8, "name": "nose"},
            {"x": 3.0, "y": 4.0}
        ],
        "dimensions": {"width": 640.0, "height": 480.0}
    }"#;
    let frame: PoseFrame = serde_json::from_str(json).unwrap();
    assert_eq!(frame.keypoints.len(), 2);
    assert_eq!(frame.keypoints[0].joint(), Some(Joint::Nose));
    assert_eq!(frame.keypoints[1].score, 0.0);
    assert_eq!(frame.keypoints[1].joint(), None);
    assert_eq!(frame.dimensions.center().x, 320.0);
}
