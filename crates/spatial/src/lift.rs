use {
    crate::{depth::DepthEstimator, error::SpatialError},
    base::Vec3,
    pose::{Dimensions, Keypoints2D, Keypoints3D, PoseFrame},
};

/// Depth given to the top of the body by the range-normalized lift.
const RANGE_DEPTH_SCALE: f64 = 100.0;

/// Lifts a frame with per-keypoint depth from a `DepthEstimator`.
///
/// x and y are re-centered on the viewport with y pointing up, and depth is
/// negated so the skeleton sits in front of a camera looking down -z.
#[derive(Debug, Clone, Default)]
pub struct DepthLifter {
    estimator: DepthEstimator,
    viewport: Option<Dimensions>,
}

impl DepthLifter {
    pub fn new(estimator: DepthEstimator, viewport: Option<Dimensions>) -> Self {
        Self {
            estimator,
            viewport,
        }
    }

    pub fn estimator(&self) -> &DepthEstimator {
        &self.estimator
    }

    /// Lifts `frame`, failing when the estimator has no usable anchors.
    pub fn try_lift(&self, frame: &PoseFrame) -> Result<Keypoints3D, SpatialError> {
        let depths = self.estimator.try_estimate(frame)?;
        Ok(self.place(frame, &depths))
    }

    /// Like `try_lift`, but a frame without usable anchors sits at z = 0.
    pub fn lift(&self, frame: &PoseFrame) -> Keypoints3D {
        self.place(frame, &self.estimator.estimate(frame))
    }

    pub(crate) fn place(&self, frame: &PoseFrame, depths: &[f64]) -> Keypoints3D {
        let center = self.viewport.unwrap_or(frame.dimensions).center();

        let mut lifted = Keypoints3D::new();
        for (kp, depth) in frame.keypoints.iter().zip(depths) {
            let Some(joint) = kp.joint() else {
                base::log_debug!("depth lift: skipping unknown keypoint {:?}", kp.name);
                continue;
            };
            lifted.insert(joint, Vec3::new(kp.x - center.x, -(kp.y - center.y), -depth));
        }
        lifted
    }
}

/// Quick lift without camera geometry: z comes from the relative vertical
/// position, 100 at the highest point and 0 at the lowest (image y grows
/// downward). A flat input gets z = 0 everywhere.
pub fn lift_range_normalized(points: &Keypoints2D) -> Keypoints3D {
    let max_y = points.values().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.values().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let range = max_y - min_y;
    let flat = !(range > 0.0 && range.is_finite());
    if flat && !points.is_empty() {
        base::log_debug!("range lift: zero vertical range, using z = 0");
    }

    points
        .iter()
        .map(|(joint, p)| {
            let z = if flat {
                0.0
            } else {
                (max_y - p.y) / range * RANGE_DEPTH_SCALE
            };
            (*joint, Vec3::new(p.x, p.y, z))
        })
        .collect()
}
