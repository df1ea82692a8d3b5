//! Causal temporal filters selectable through `SpatialConfig`.
//!
//! Zero-phase Butterworth filtering needs the whole trajectory up front, so
//! it has no place in a frame-by-frame pipeline and is not offered here.

use {
    crate::{config::SpatialConfig, error::SpatialError, smooth::TemporalSmoother},
    base::Vec3,
    pose::{Joint, Keypoints3D},
    serde::{Deserialize, Serialize},
    std::collections::{BTreeMap, VecDeque},
};

pub const DEFAULT_PROCESS_NOISE: f64 = 0.1;
pub const DEFAULT_MEASUREMENT_NOISE: f64 = 0.01;
pub const DEFAULT_INITIAL_UNCERTAINTY: f64 = 1000.0;
pub const DEFAULT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    #[default]
    Ema,
    Kalman,
    MovingAverage,
}

/// Constant-velocity Kalman filter for one coordinate, one frame per step.
#[derive(Debug, Clone, Copy)]
struct AxisKalman {
    position: f64,
    velocity: f64,
    covariance: [[f64; 2]; 2],
}

impl AxisKalman {
    fn new(measurement: f64, measurement_noise: f64) -> Self {
        Self {
            position: measurement,
            velocity: 0.0,
            covariance: [[measurement_noise, 0.0], [0.0, DEFAULT_INITIAL_UNCERTAINTY]],
        }
    }

    fn update(&mut self, measurement: f64, process_noise: f64, measurement_noise: f64) -> f64 {
        // predict with F = [[1, 1], [0, 1]], Q = q * I
        let [[p00, p01], [p10, p11]] = self.covariance;
        let position = self.position + self.velocity;
        let p00 = p00 + p01 + p10 + p11 + process_noise;
        let p01 = p01 + p11;
        let p10 = p10 + p11;
        let p11 = p11 + process_noise;

        // correct with H = [1, 0]
        let innovation = measurement - position;
        let s = p00 + measurement_noise;
        let k0 = p00 / s;
        let k1 = p10 / s;
        self.position = position + k0 * innovation;
        self.velocity += k1 * innovation;
        self.covariance = [
            [(1.0 - k0) * p00, (1.0 - k0) * p01],
            [p10 - k1 * p00, p11 - k1 * p01],
        ];
        self.position
    }
}

/// Per-joint constant-velocity Kalman filter.
///
/// The first sighting of a joint is returned unchanged and seeds its track.
/// Joints absent from a frame keep their track untouched.
#[derive(Debug, Clone)]
pub struct KalmanSmoother {
    process_noise: f64,
    measurement_noise: f64,
    tracks: BTreeMap<Joint, [AxisKalman; 3]>,
}

impl Default for KalmanSmoother {
    fn default() -> Self {
        Self {
            process_noise: DEFAULT_PROCESS_NOISE,
            measurement_noise: DEFAULT_MEASUREMENT_NOISE,
            tracks: BTreeMap::new(),
        }
    }
}

impl KalmanSmoother {
    pub fn new(process_noise: f64, measurement_noise: f64) -> Result<Self, SpatialError> {
        for (name, value) in [("process", process_noise), ("measurement", measurement_noise)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SpatialError::Config(format!(
                    "kalman {name} noise must be positive, got {value}"
                )));
            }
        }
        Ok(Self {
            process_noise,
            measurement_noise,
            tracks: BTreeMap::new(),
        })
    }

    pub fn is_primed(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn smooth(&mut self, current: &Keypoints3D) -> Keypoints3D {
        let (q, r) = (self.process_noise, self.measurement_noise);
        current.map_points(|joint, point| match self.tracks.get_mut(&joint) {
            Some([x, y, z]) => Vec3::new(
                x.update(point.x, q, r),
                y.update(point.y, q, r),
                z.update(point.z, q, r),
            ),
            None => {
                self.tracks.insert(
                    joint,
                    [
                        AxisKalman::new(point.x, r),
                        AxisKalman::new(point.y, r),
                        AxisKalman::new(point.z, r),
                    ],
                );
                point
            }
        })
    }

    pub fn reset(&mut self) {
        self.tracks.clear();
    }
}

/// Trailing mean over the last `window` sightings of each joint.
///
/// Until a joint has `window` samples the mean covers the samples seen so far.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    history: BTreeMap<Joint, VecDeque<Vec3<f64>>>,
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            history: BTreeMap::new(),
        }
    }
}

impl MovingAverage {
    pub fn new(window: usize) -> Result<Self, SpatialError> {
        if window == 0 {
            return Err(SpatialError::Config(
                "moving average window must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            window,
            history: BTreeMap::new(),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn is_primed(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn smooth(&mut self, current: &Keypoints3D) -> Keypoints3D {
        current.map_points(|joint, point| {
            let samples = self.history.entry(joint).or_default();
            if samples.len() == self.window {
                samples.pop_front();
            }
            samples.push_back(point);
            let mut sum = Vec3::zero();
            for sample in samples.iter() {
                sum += *sample;
            }
            sum / samples.len() as f64
        })
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

/// The temporal filter a pipeline runs, picked by `FilterKind`.
#[derive(Debug, Clone)]
pub enum TemporalFilter {
    Ema(TemporalSmoother),
    Kalman(KalmanSmoother),
    MovingAverage(MovingAverage),
}

impl Default for TemporalFilter {
    fn default() -> Self {
        TemporalFilter::Ema(TemporalSmoother::default())
    }
}

impl From<TemporalSmoother> for TemporalFilter {
    fn from(smoother: TemporalSmoother) -> Self {
        TemporalFilter::Ema(smoother)
    }
}

impl From<KalmanSmoother> for TemporalFilter {
    fn from(smoother: KalmanSmoother) -> Self {
        TemporalFilter::Kalman(smoother)
    }
}

impl From<MovingAverage> for TemporalFilter {
    fn from(smoother: MovingAverage) -> Self {
        TemporalFilter::MovingAverage(smoother)
    }
}

impl TemporalFilter {
    pub fn from_config(config: &SpatialConfig) -> Result<Self, SpatialError> {
        Ok(match config.temporal_filter {
            FilterKind::Ema => TemporalSmoother::new(config.smoothing_alpha)?.into(),
            FilterKind::Kalman => {
                KalmanSmoother::new(config.kalman_process_noise, config.kalman_measurement_noise)?
                    .into()
            }
            FilterKind::MovingAverage => MovingAverage::new(config.moving_average_window)?.into(),
        })
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            TemporalFilter::Ema(_) => FilterKind::Ema,
            TemporalFilter::Kalman(_) => FilterKind::Kalman,
            TemporalFilter::MovingAverage(_) => FilterKind::MovingAverage,
        }
    }

    pub fn is_primed(&self) -> bool {
        match self {
            TemporalFilter::Ema(f) => f.is_primed(),
            TemporalFilter::Kalman(f) => f.is_primed(),
            TemporalFilter::MovingAverage(f) => f.is_primed(),
        }
    }

    pub fn smooth(&mut self, current: &Keypoints3D) -> Keypoints3D {
        match self {
            TemporalFilter::Ema(f) => f.smooth(current),
            TemporalFilter::Kalman(f) => f.smooth(current),
            TemporalFilter::MovingAverage(f) => f.smooth(current),
        }
    }

    pub fn reset(&mut self) {
        match self {
            TemporalFilter::Ema(f) => f.reset(),
            TemporalFilter::Kalman(f) => f.reset(),
            TemporalFilter::MovingAverage(f) => f.reset(),
        }
    }
}
