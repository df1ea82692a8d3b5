pub mod analysis;
pub mod consolidate;
pub mod error;
pub mod frame;
pub mod goal;
pub mod keypoint;
pub mod motion;
pub mod skeleton;

pub use analysis::{Analysis, Analyzer, ModelDetection, analyze_goal};
pub use consolidate::{ConsolidatedAnalysis, ModelResult, ModelType, consolidate};
pub use error::PoseError;
pub use frame::{Dimensions, PoseFrame};
pub use goal::{GoalAnalyzer, GoalFeedback, GoalStrategy, StaticProfile, TrainingGoal};
pub use keypoint::{Joint, JointKind, Keypoint2D, Side};
pub use motion::{DetectedMotion, MotionMatcher, MotionSignature, Phase};
pub use skeleton::{Keypoints2D, Keypoints3D, SKELETON_CONNECTIONS};
