use {
    super::{MotionSignature, Phase},
    crate::{
        frame::PoseFrame,
        keypoint::{JointKind, Keypoint2D},
    },
};

/// Pixel span that maps a geometric proxy to a unit score.
const REFERENCE_SPAN_PX: f64 = 100.0;

/// Shoulder rotation proxy (px) below which a discus throw is still winding up.
const WIND_UP_ROTATION_PX: f64 = 30.0;

/// Shoulder rotation proxy (px) below which a discus throw is in transition.
const TRANSITION_ROTATION_PX: f64 = 90.0;

fn min_x(points: &[&Keypoint2D]) -> f64 {
    points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
}

fn max_x(points: &[&Keypoint2D]) -> f64 {
    points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
}

fn min_y(points: &[&Keypoint2D]) -> f64 {
    points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
}

/// Horizontal separation of the first two keypoints, the rotation proxy.
fn rotation(points: &[&Keypoint2D]) -> f64 {
    (points[0].x - points[1].x).abs()
}

pub struct DiscusThrow;

impl MotionSignature for DiscusThrow {
    fn name(&self) -> &'static str {
        "discusThrow"
    }

    fn score(&self, frame: &PoseFrame) -> f64 {
        let shoulders = frame.of_kind(JointKind::Shoulder);
        let hips = frame.of_kind(JointKind::Hip);
        let wrists = frame.of_kind(JointKind::Wrist);
        if shoulders.len() < 2 || hips.len() < 2 || wrists.len() < 2 {
            return 0.0;
        }

        let rotation_score = (rotation(&shoulders) + rotation(&hips)) / 2.0 / REFERENCE_SPAN_PX;
        let arm_score = (max_x(&wrists) - min_x(&shoulders)) / REFERENCE_SPAN_PX;
        rotation_score * 0.6 + arm_score * 0.4
    }

    fn phase(&self, frame: &PoseFrame) -> Phase {
        let shoulders = frame.of_kind(JointKind::Shoulder);
        let hips = frame.of_kind(JointKind::Hip);
        if shoulders.len() < 2 || hips.len() < 2 {
            return Phase::Unknown;
        }

        let shoulder_rotation = rotation(&shoulders);
        if shoulder_rotation < WIND_UP_ROTATION_PX {
            Phase::WindUp
        } else if shoulder_rotation < TRANSITION_ROTATION_PX {
            Phase::Transition
        } else {
            Phase::Release
        }
    }
}

pub struct ShotPut;

impl MotionSignature for ShotPut {
    fn name(&self) -> &'static str {
        "shotPut"
    }

    fn score(&self, frame: &PoseFrame) -> f64 {
        let shoulders = frame.of_kind(JointKind::Shoulder);
        let elbows = frame.of_kind(JointKind::Elbow);
        if shoulders.len() < 2 || elbows.len() < 2 {
            return 0.0;
        }

        // elbow flexion against the leading shoulder
        (elbows[0].y - shoulders[0].y).abs() / REFERENCE_SPAN_PX
    }

    fn phase(&self, _frame: &PoseFrame) -> Phase {
        Phase::Preparation
    }
}

pub struct JavelinThrow;

impl MotionSignature for JavelinThrow {
    fn name(&self) -> &'static str {
        "javelinThrow"
    }

    fn score(&self, frame: &PoseFrame) -> f64 {
        let shoulders = frame.of_kind(JointKind::Shoulder);
        let elbows = frame.of_kind(JointKind::Elbow);
        let wrists = frame.of_kind(JointKind::Wrist);
        if shoulders.len() < 2 || elbows.len() < 2 || wrists.len() < 2 {
            return 0.0;
        }

        // image y grows downward, so a raised wrist has the smaller y
        let overhead = min_y(&shoulders) - min_y(&wrists);
        let extension = max_x(&wrists) - min_x(&elbows);
        (overhead * 0.7 + extension * 0.3) / REFERENCE_SPAN_PX
    }

    fn phase(&self, _frame: &PoseFrame) -> Phase {
        Phase::Approach
    }
}
