use {
    crate::{
        keypoint::{Joint, JointKind, Keypoint2D},
        skeleton::Keypoints2D,
    },
    base::Vec2,
    serde::{Deserialize, Serialize},
};

/// Pixel size of the source video frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2<f64> {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One frame of 2D keypoints from a pose source, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    pub keypoints: Vec<Keypoint2D>,
    pub dimensions: Dimensions,
}

impl PoseFrame {
    pub fn new(keypoints: Vec<Keypoint2D>, dimensions: Dimensions) -> Self {
        Self {
            keypoints,
            dimensions,
        }
    }

    pub fn keypoint(&self, joint: Joint) -> Option<&Keypoint2D> {
        self.keypoints.iter().find(|kp| kp.joint() == Some(joint))
    }

    /// Keypoints of one kind, in frame order.
    pub fn of_kind(&self, kind: JointKind) -> Vec<&Keypoint2D> {
        self.keypoints.iter().filter(|kp| kp.is_kind(kind)).collect()
    }

    /// Keypoints of one kind whose score is strictly above `min_score`.
    pub fn confident_of_kind(&self, kind: JointKind, min_score: f64) -> Vec<&Keypoint2D> {
        self.keypoints
            .iter()
            .filter(|kp| kp.is_kind(kind) && kp.score > min_score)
            .collect()
    }

    /// Positions of all keypoints with a known joint name. Unknown names are dropped.
    pub fn to_keypoints2d(&self) -> Keypoints2D {
        self.keypoints
            .iter()
            .filter_map(|kp| kp.joint().map(|joint| (joint, Vec2::new(kp.x, kp.y))))
            .collect()
    }
}
