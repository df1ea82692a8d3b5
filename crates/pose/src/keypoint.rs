use serde::{Deserialize, Serialize};

/// Anatomical joints known to the pipeline.
///
/// Declaration order is the canonical ordering used by `Keypoints3D` maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Joint {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointKind {
    Nose,
    Eye,
    Ear,
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
    Heel,
    FootIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Center,
    Left,
    Right,
}

impl Joint {
    pub const ALL: [Joint; 21] = [
        Joint::Nose,
        Joint::LeftEye,
        Joint::RightEye,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
        Joint::LeftHeel,
        Joint::RightHeel,
        Joint::LeftFootIndex,
        Joint::RightFootIndex,
    ];

    /// Wire name as emitted by the pose source, e.g. `"leftShoulder"`.
    pub fn name(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftEye => "leftEye",
            Joint::RightEye => "rightEye",
            Joint::LeftEar => "leftEar",
            Joint::RightEar => "rightEar",
            Joint::LeftShoulder => "leftShoulder",
            Joint::RightShoulder => "rightShoulder",
            Joint::LeftElbow => "leftElbow",
            Joint::RightElbow => "rightElbow",
            Joint::LeftWrist => "leftWrist",
            Joint::RightWrist => "rightWrist",
            Joint::LeftHip => "leftHip",
            Joint::RightHip => "rightHip",
            Joint::LeftKnee => "leftKnee",
            Joint::RightKnee => "rightKnee",
            Joint::LeftAnkle => "leftAnkle",
            Joint::RightAnkle => "rightAnkle",
            Joint::LeftHeel => "leftHeel",
            Joint::RightHeel => "rightHeel",
            Joint::LeftFootIndex => "leftFootIndex",
            Joint::RightFootIndex => "rightFootIndex",
        }
    }

    /// Looks up a joint by wire name. Names outside the vocabulary yield `None`.
    pub fn from_name(name: &str) -> Option<Joint> {
        Joint::ALL.into_iter().find(|joint| joint.name() == name)
    }

    pub fn kind(self) -> JointKind {
        match self {
            Joint::Nose => JointKind::Nose,
            Joint::LeftEye | Joint::RightEye => JointKind::Eye,
            Joint::LeftEar | Joint::RightEar => JointKind::Ear,
            Joint::LeftShoulder | Joint::RightShoulder => JointKind::Shoulder,
            Joint::LeftElbow | Joint::RightElbow => JointKind::Elbow,
            Joint::LeftWrist | Joint::RightWrist => JointKind::Wrist,
            Joint::LeftHip | Joint::RightHip => JointKind::Hip,
            Joint::LeftKnee | Joint::RightKnee => JointKind::Knee,
            Joint::LeftAnkle | Joint::RightAnkle => JointKind::Ankle,
            Joint::LeftHeel | Joint::RightHeel => JointKind::Heel,
            Joint::LeftFootIndex | Joint::RightFootIndex => JointKind::FootIndex,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Joint::Nose => Side::Center,
            Joint::LeftEye
            | Joint::LeftEar
            | Joint::LeftShoulder
            | Joint::LeftElbow
            | Joint::LeftWrist
            | Joint::LeftHip
            | Joint::LeftKnee
            | Joint::LeftAnkle
            | Joint::LeftHeel
            | Joint::LeftFootIndex => Side::Left,
            _ => Side::Right,
        }
    }
}

impl TryFrom<&str> for Joint {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Joint::from_name(value).ok_or_else(|| format!("Unknown joint name: {:?}", value))
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single named 2D keypoint in source-frame pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint2D {
    pub x: f64,
    pub y: f64,
    /// Detection confidence in [0.0, 1.0].
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub name: String,
}

impl Keypoint2D {
    pub fn new(name: impl Into<String>, x: f64, y: f64, score: f64) -> Self {
        Self {
            x,
            y,
            score,
            name: name.into(),
        }
    }

    pub fn joint(&self) -> Option<Joint> {
        Joint::from_name(&self.name)
    }

    pub fn is_kind(&self, kind: JointKind) -> bool {
        self.joint().is_some_and(|joint| joint.kind() == kind)
    }
}
