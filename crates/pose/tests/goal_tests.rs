use pose::{
    Dimensions, GoalAnalyzer, GoalFeedback, GoalStrategy, JointKind, Keypoint2D, PoseError,
    PoseFrame, TrainingGoal,
};

fn empty_frame() -> PoseFrame {
    PoseFrame::new(Vec::new(), Dimensions::new(640.0, 480.0))
}

#[test]
fn test_goal_parsing() {
    assert_eq!("technique".parse::<TrainingGoal>(), Ok(TrainingGoal::Technique));
    assert_eq!("flexibility".parse::<TrainingGoal>(), Ok(TrainingGoal::Flexibility));
    assert_eq!(
        "bogus".parse::<TrainingGoal>(),
        Err(PoseError::InvalidGoal("bogus".to_string()))
    );
    assert!("Strength".parse::<TrainingGoal>().is_err());
}

#[test]
fn test_baseline_profiles() {
    let analyzer = GoalAnalyzer::default();
    let expected = [
        (TrainingGoal::Technique, 85.0, "Keep shoulders back and chest up"),
        (TrainingGoal::Strength, 78.0, "Increase time under tension"),
        (TrainingGoal::Endurance, 82.0, "Maintain consistent pace"),
        (TrainingGoal::Flexibility, 75.0, "Hold stretches for 30-60 seconds"),
    ];
    for (goal, score, recommendation) in expected {
        let feedback = analyzer.analyze(&empty_frame(), goal).unwrap();
        assert_eq!(feedback.score, score);
        assert_eq!(feedback.recommendations.len(), 3);
        assert_eq!(feedback.improvements.len(), 3);
        assert!(feedback.recommendations.iter().any(|r| r == recommendation));
    }
}

#[test]
fn test_invalid_goal_name() {
    let result = GoalAnalyzer::default().analyze_named(&empty_frame(), "bogus");
    assert!(matches!(result, Err(PoseError::InvalidGoal(goal)) if goal == "bogus"));
}

/// Scores by how many wrists are visible, to prove the strategy sees the frame.
struct WristCount;

impl GoalStrategy for WristCount {
    fn evaluate(&self, frame: &PoseFrame) -> GoalFeedback {
        let wrists = frame.of_kind(JointKind::Wrist).len();
        GoalFeedback {
            recommendations: vec![format!("{wrists} wrists visible")],
            improvements: Vec::new(),
            score: 60.0 * wrists as f64,
        }
    }
}

#[test]
fn test_pluggable_strategy() {
    let analyzer = GoalAnalyzer::default().with_strategy(TrainingGoal::Strength, Box::new(WristCount));
    let frame = PoseFrame::new(
        vec![
            Keypoint2D::new("leftWrist", 0.0, 0.0, 1.0),
            Keypoint2D::new("rightWrist", 1.0, 0.0, 1.0),
        ],
        Dimensions::new(10.0, 10.0),
    );
    let feedback = analyzer.analyze(&frame, TrainingGoal::Strength).unwrap();
    assert_eq!(feedback.recommendations, vec!["2 wrists visible"]);
    // 120 is clamped to the documented range
    assert_eq!(feedback.score, 100.0);

    let untouched = analyzer.analyze(&frame, TrainingGoal::Technique).unwrap();
    assert_eq!(untouched.score, 85.0);
}
