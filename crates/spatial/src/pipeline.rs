use {
    crate::{
        config::SpatialConfig,
        depth::DepthEstimator,
        error::SpatialError,
        filter::TemporalFilter,
        height::Height,
        lift::{DepthLifter, lift_range_normalized},
        scale::{apply_scale, try_calibrate},
        smooth::TemporalSmoother,
    },
    pose::{Keypoints2D, Keypoints3D, PoseFrame},
    serde::{Deserialize, Serialize},
};

/// Range-normalized lift, metric calibration and smoothing.
///
/// A frame that cannot be calibrated reuses the last good scale factor so the
/// filter history stays in meters. Before the first calibration such frames
/// come out at identity scale and bypass the filter entirely.
#[derive(Debug, Clone)]
pub struct ScalePipeline {
    height: Height,
    smoother: TemporalFilter,
    last_scale: Option<f64>,
}

impl Default for ScalePipeline {
    fn default() -> Self {
        Self::new(Height::default(), TemporalSmoother::default())
    }
}

impl ScalePipeline {
    pub fn new(height: Height, smoother: impl Into<TemporalFilter>) -> Self {
        Self {
            height,
            smoother: smoother.into(),
            last_scale: None,
        }
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Most recent successful calibration, 1.0 before the first one.
    pub fn last_scale(&self) -> f64 {
        self.last_scale.unwrap_or(1.0)
    }

    pub fn is_calibrated(&self) -> bool {
        self.last_scale.is_some()
    }

    pub fn smoother(&self) -> &TemporalFilter {
        &self.smoother
    }

    pub fn process(&mut self, points: &Keypoints2D) -> Keypoints3D {
        let lifted = lift_range_normalized(points);
        match (try_calibrate(&lifted, &self.height), self.last_scale) {
            (Ok(scale), _) => {
                self.last_scale = Some(scale);
                self.smoother.smooth(&apply_scale(&lifted, scale))
            }
            (Err(error), Some(scale)) => {
                base::log_warn!("calibration skipped, reusing scale {:.6}: {}", scale, error);
                self.smoother.smooth(&apply_scale(&lifted, scale))
            }
            (Err(error), None) => {
                base::log_warn!("calibration skipped, no scale yet: {}", error);
                lifted
            }
        }
    }

    pub fn reset(&mut self) {
        self.smoother.reset();
        self.last_scale = None;
    }
}

/// Depth-estimator lift and smoothing. Keeps its own filter history.
///
/// Frames without usable depth anchors are returned at z = 0 and are not fed
/// to the filter, so they never pull the history toward the camera plane.
#[derive(Debug, Clone, Default)]
pub struct DepthPipeline {
    lifter: DepthLifter,
    smoother: TemporalFilter,
}

impl DepthPipeline {
    pub fn new(lifter: DepthLifter, smoother: impl Into<TemporalFilter>) -> Self {
        Self {
            lifter,
            smoother: smoother.into(),
        }
    }

    pub fn smoother(&self) -> &TemporalFilter {
        &self.smoother
    }

    pub fn process(&mut self, frame: &PoseFrame) -> Keypoints3D {
        match self.lifter.try_lift(frame) {
            Ok(lifted) => self.smoother.smooth(&lifted),
            Err(error) => {
                base::log_warn!("depth lift degraded, history kept: {}", error);
                self.lifter.place(frame, &vec![0.0; frame.keypoints.len()])
            }
        }
    }

    pub fn reset(&mut self) {
        self.smoother.reset();
    }
}

/// Both spatial reconstructions of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialFrame {
    /// Metric skeleton from the range-normalized lift.
    pub scaled: Keypoints3D,
    pub scale_factor: f64,
    /// Camera-space skeleton from the depth-estimator lift.
    pub depth: Keypoints3D,
}

/// Per-video spatial state. One session per concurrently analysed video.
#[derive(Debug, Clone, Default)]
pub struct SpatialSession {
    scale: ScalePipeline,
    depth: DepthPipeline,
}

impl SpatialSession {
    pub fn from_config(config: &SpatialConfig) -> Result<Self, SpatialError> {
        config.validate()?;
        let scale = ScalePipeline::new(config.height, TemporalFilter::from_config(config)?);
        let depth = DepthPipeline::new(
            DepthLifter::new(DepthEstimator::from_config(config), config.viewport),
            TemporalFilter::from_config(config)?,
        );
        Ok(Self { scale, depth })
    }

    pub fn scale_pipeline(&mut self) -> &mut ScalePipeline {
        &mut self.scale
    }

    pub fn depth_pipeline(&mut self) -> &mut DepthPipeline {
        &mut self.depth
    }

    pub fn process(&mut self, frame: &PoseFrame) -> SpatialFrame {
        let scaled = self.scale.process(&frame.to_keypoints2d());
        SpatialFrame {
            scaled,
            scale_factor: self.scale.last_scale(),
            depth: self.depth.process(frame),
        }
    }

    /// Clears both smoothers, e.g. when a new video is loaded.
    pub fn reset(&mut self) {
        base::log_debug!("spatial session reset");
        self.scale.reset();
        self.depth.reset();
    }
}
