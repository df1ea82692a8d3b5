use {
    crate::keypoint::Joint,
    base::{Vec2, Vec3},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Bone segments drawn by skeleton renderers.
pub const SKELETON_CONNECTIONS: [(Joint, Joint); 15] = [
    (Joint::LeftEye, Joint::RightEye),
    (Joint::LeftEye, Joint::LeftEar),
    (Joint::RightEye, Joint::RightEar),
    (Joint::LeftShoulder, Joint::RightShoulder),
    (Joint::LeftShoulder, Joint::LeftElbow),
    (Joint::LeftElbow, Joint::LeftWrist),
    (Joint::RightShoulder, Joint::RightElbow),
    (Joint::RightElbow, Joint::RightWrist),
    (Joint::LeftShoulder, Joint::LeftHip),
    (Joint::RightShoulder, Joint::RightHip),
    (Joint::LeftHip, Joint::RightHip),
    (Joint::LeftHip, Joint::LeftKnee),
    (Joint::LeftKnee, Joint::LeftAnkle),
    (Joint::RightHip, Joint::RightKnee),
    (Joint::RightKnee, Joint::RightAnkle),
];

/// Named 2D positions, keyed by joint.
pub type Keypoints2D = BTreeMap<Joint, Vec2<f64>>;

/// Named 3D positions, right-handed with the camera looking down -z.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keypoints3D {
    points: BTreeMap<Joint, Vec3<f64>>,
}

impl Keypoints3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, joint: Joint) -> Option<Vec3<f64>> {
        self.points.get(&joint).copied()
    }

    pub fn insert(&mut self, joint: Joint, point: Vec3<f64>) -> Option<Vec3<f64>> {
        self.points.insert(joint, point)
    }

    pub fn contains(&self, joint: Joint) -> bool {
        self.points.contains_key(&joint)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Joint, Vec3<f64>)> + '_ {
        self.points.iter().map(|(joint, point)| (*joint, *point))
    }

    pub fn joints(&self) -> impl Iterator<Item = Joint> + '_ {
        self.points.keys().copied()
    }

    /// Applies `f` to every point, keeping joint identity.
    pub fn map_points(&self, mut f: impl FnMut(Joint, Vec3<f64>) -> Vec3<f64>) -> Self {
        self.iter().map(|(joint, point)| (joint, f(joint, point))).collect()
    }

    pub fn midpoint(&self, a: Joint, b: Joint) -> Option<Vec3<f64>> {
        Some(self.get(a)?.midpoint(self.get(b)?))
    }

    pub fn eye_center(&self) -> Option<Vec3<f64>> {
        self.midpoint(Joint::LeftEye, Joint::RightEye)
    }

    pub fn heel_center(&self) -> Option<Vec3<f64>> {
        self.midpoint(Joint::LeftHeel, Joint::RightHeel)
    }
}

impl FromIterator<(Joint, Vec3<f64>)> for Keypoints3D {
    fn from_iter<I: IntoIterator<Item = (Joint, Vec3<f64>)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
