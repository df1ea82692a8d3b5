use {
    crate::{
        error::SpatialError,
        filter::{
            DEFAULT_MEASUREMENT_NOISE, DEFAULT_PROCESS_NOISE, DEFAULT_WINDOW, FilterKind,
        },
        height::Height,
    },
    pose::Dimensions,
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

/// Tunables for depth estimation, calibration and smoothing.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Pinhole focal length in pixels.
    pub focal_length: f64,
    /// Standing height assumed by the depth estimator, in meters.
    pub assumed_height_m: f64,
    /// Fraction of the base depth added at the heels relative to the eyes.
    pub depth_variation: f64,
    /// Eyes and heels at or below this score are ignored for depth.
    pub min_anchor_score: f64,
    /// Temporal filter run by both spatial pipelines.
    pub temporal_filter: FilterKind,
    /// Weight of the previous frame in the `ema` filter.
    pub smoothing_alpha: f64,
    /// Frames averaged by the `movingAverage` filter.
    pub moving_average_window: usize,
    pub kalman_process_noise: f64,
    pub kalman_measurement_noise: f64,
    /// Real height used to calibrate the range-normalized skeleton.
    pub height: Height,
    /// Origin for the depth lift; the frame's own dimensions when unset.
    pub viewport: Option<Dimensions>,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            focal_length: 1000.0,
            assumed_height_m: 1.75,
            depth_variation: 0.1,
            min_anchor_score: 0.5,
            temporal_filter: FilterKind::Ema,
            smoothing_alpha: 0.8,
            moving_average_window: DEFAULT_WINDOW,
            kalman_process_noise: DEFAULT_PROCESS_NOISE,
            kalman_measurement_noise: DEFAULT_MEASUREMENT_NOISE,
            height: Height::default(),
            viewport: None,
        }
    }
}

impl SpatialConfig {
    pub fn from_json(json: &str) -> Result<Self, SpatialError> {
        let config: SpatialConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpatialError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        base::log_info!("loaded spatial config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SpatialError> {
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha < 1.0) {
            return Err(SpatialError::InvalidAlpha(self.smoothing_alpha));
        }
        if !(self.focal_length > 0.0 && self.focal_length.is_finite()) {
            return Err(SpatialError::Config(format!(
                "focal_length must be positive, got {}",
                self.focal_length
            )));
        }
        if !(self.assumed_height_m > 0.0 && self.assumed_height_m.is_finite()) {
            return Err(SpatialError::InvalidHeight(self.assumed_height_m));
        }
        if self.moving_average_window == 0 {
            return Err(SpatialError::Config(
                "moving_average_window must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("kalman_process_noise", self.kalman_process_noise),
            ("kalman_measurement_noise", self.kalman_measurement_noise),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SpatialError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let meters = self.height.to_meters();
        if !(meters > 0.0 && meters.is_finite()) {
            return Err(SpatialError::InvalidHeight(self.height.value));
        }
        Ok(())
    }
}
