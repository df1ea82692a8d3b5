use pose::{
    Analyzer, Dimensions, Keypoint2D, ModelDetection, ModelType, PoseError, PoseFrame,
    TrainingGoal, analyze_goal,
};

fn discus_frame() -> PoseFrame {
    PoseFrame::new(
        vec![
            Keypoint2D::new("leftShoulder", 100.0, 100.0, 0.9),
            Keypoint2D::new("rightShoulder", 160.0, 100.0, 0.9),
            Keypoint2D::new("leftHip", 110.0, 200.0, 0.9),
            Keypoint2D::new("rightHip", 150.0, 200.0, 0.9),
            Keypoint2D::new("leftWrist", 50.0, 150.0, 0.9),
            Keypoint2D::new("rightWrist", 220.0, 150.0, 0.9),
        ],
        Dimensions::new(640.0, 480.0),
    )
}

fn shot_put_frame() -> PoseFrame {
    PoseFrame::new(
        vec![
            Keypoint2D::new("leftShoulder", 100.0, 100.0, 0.9),
            Keypoint2D::new("rightShoulder", 130.0, 100.0, 0.9),
            Keypoint2D::new("leftElbow", 95.0, 140.0, 0.9),
            Keypoint2D::new("rightElbow", 135.0, 130.0, 0.9),
        ],
        Dimensions::new(640.0, 480.0),
    )
}

#[test]
fn test_analyze_goal_rejects_unknown_goal() {
    assert_eq!(
        analyze_goal(discus_frame(), "bogus"),
        Err(PoseError::InvalidGoal("bogus".to_string()))
    );
}

#[test]
fn test_analyze_goal_single_model() {
    let analysis = analyze_goal(discus_frame(), "technique").unwrap();
    assert_eq!(analysis.model_results.len(), 1);

    let result = &analysis.model_results[0];
    assert_eq!(result.model_name, ModelType::BlazePose);
    assert_eq!(result.detected_motion, "discusThrow");
    assert!((result.confidence - 78.0).abs() < 1e-9);
    assert_eq!(result.score, 85.0);
    assert_eq!(result.pose_data, discus_frame());

    assert_eq!(analysis.consolidated.detected_motion, "discusThrow");
    assert_eq!(analysis.consolidated.score, 85.0);
    assert_eq!(analysis.consolidated.recommendations, result.recommendations);
}

#[test]
fn test_multi_model_analysis() {
    let analyzer = Analyzer::default();
    let analysis = analyzer
        .analyze(
            vec![
                ModelDetection {
                    model: ModelType::MoveNet,
                    pose: shot_put_frame(),
                },
                ModelDetection {
                    model: ModelType::BlazePose,
                    pose: discus_frame(),
                },
            ],
            TrainingGoal::Strength,
        )
        .unwrap();

    assert_eq!(analysis.model_results.len(), 2);
    assert_eq!(analysis.model_results[0].detected_motion, "shotPut");
    assert!((analysis.model_results[0].confidence - 40.0).abs() < 1e-9);
    assert_eq!(analysis.consolidated.detected_motion, "discusThrow");
    assert!((analysis.consolidated.confidence - 78.0).abs() < 1e-9);
    assert_eq!(analysis.consolidated.score, 78.0);
    assert_eq!(analysis.consolidated.recommendations.len(), 3);
}

#[test]
fn test_multi_model_analysis_requires_detections() {
    let result = Analyzer::default().analyze(Vec::new(), TrainingGoal::Endurance);
    assert_eq!(result, Err(PoseError::EmptyModelResults));
}
