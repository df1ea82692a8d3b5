//! Monocular depth from anthropometric priors.
//!
//! The visible eye-to-heel span in pixels is matched against an assumed
//! standing height through the pinhole relation `Z = f * H / h`. Each
//! keypoint then gets a small linear offset by its height in the body, so
//! the result is a heuristic depth profile, not a measured depth map.

use {
    crate::{config::SpatialConfig, error::SpatialError},
    pose::{Joint, JointKind, PoseFrame},
};

const ANCHORS: [Joint; 4] = [Joint::LeftEye, Joint::RightEye, Joint::LeftHeel, Joint::RightHeel];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthEstimator {
    pub focal_length: f64,
    pub assumed_height_m: f64,
    pub variation: f64,
    pub min_anchor_score: f64,
}

impl Default for DepthEstimator {
    fn default() -> Self {
        Self::from_config(&SpatialConfig::default())
    }
}

impl DepthEstimator {
    pub fn from_config(config: &SpatialConfig) -> Self {
        Self {
            focal_length: config.focal_length,
            assumed_height_m: config.assumed_height_m,
            variation: config.depth_variation,
            min_anchor_score: config.min_anchor_score,
        }
    }

    /// One depth per keypoint, in frame order.
    pub fn try_estimate(&self, frame: &PoseFrame) -> Result<Vec<f64>, SpatialError> {
        let eyes = frame.confident_of_kind(JointKind::Eye, self.min_anchor_score);
        let heels = frame.confident_of_kind(JointKind::Heel, self.min_anchor_score);
        if eyes.len() < 2 || heels.len() < 2 {
            let missing = ANCHORS
                .into_iter()
                .filter(|anchor| {
                    frame
                        .keypoint(*anchor)
                        .is_none_or(|kp| kp.score <= self.min_anchor_score)
                })
                .collect();
            return Err(SpatialError::MissingAnchorKeypoints(missing));
        }

        let eye_y = eyes.iter().map(|kp| kp.y).fold(f64::INFINITY, f64::min);
        let heel_y = heels.iter().map(|kp| kp.y).fold(f64::NEG_INFINITY, f64::max);
        let height_px = heel_y - eye_y;
        if !(height_px > 0.0 && height_px.is_finite()) {
            return Err(SpatialError::DegenerateGeometry(format!(
                "eye-to-heel span is {height_px} px"
            )));
        }

        let base_depth = self.focal_length * self.assumed_height_m / height_px;
        Ok(frame
            .keypoints
            .iter()
            .map(|kp| base_depth * (1.0 + (kp.y - eye_y) / height_px * self.variation))
            .collect())
    }

    /// Like `try_estimate`, but a frame without usable anchors yields all zeros.
    pub fn estimate(&self, frame: &PoseFrame) -> Vec<f64> {
        self.try_estimate(frame).unwrap_or_else(|error| {
            base::log_warn!("depth estimation skipped: {}", error);
            vec![0.0; frame.keypoints.len()]
        })
    }
}
