use {crate::error::SpatialError, pose::Keypoints3D};

pub const DEFAULT_ALPHA: f64 = 0.8;

/// Exponential smoothing of successive skeletons.
///
/// Each output is `alpha * previous + (1 - alpha) * current` per axis and
/// becomes the history for the next frame. Frames must be fed in playback
/// order; call `reset` when a new video starts.
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    alpha: f64,
    previous: Option<Keypoints3D>,
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            previous: None,
        }
    }
}

impl TemporalSmoother {
    pub fn new(alpha: f64) -> Result<Self, SpatialError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(SpatialError::InvalidAlpha(alpha));
        }
        Ok(Self {
            alpha,
            previous: None,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// True once a frame has been stored as history.
    pub fn is_primed(&self) -> bool {
        self.previous.is_some()
    }

    pub fn smooth(&mut self, current: &Keypoints3D) -> Keypoints3D {
        let smoothed = match &self.previous {
            None => current.clone(),
            // joints missing from history pass through as-is
            Some(previous) => current.map_points(|joint, point| match previous.get(joint) {
                Some(prev) => prev.blend(point, self.alpha),
                None => point,
            }),
        };
        self.previous = Some(smoothed.clone());
        smoothed
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
