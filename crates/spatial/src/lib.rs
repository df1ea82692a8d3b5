pub mod config;
pub mod depth;
pub mod error;
pub mod filter;
pub mod height;
pub mod kinematics;
pub mod lift;
pub mod pipeline;
pub mod scale;
pub mod smooth;

pub use config::SpatialConfig;
pub use depth::DepthEstimator;
pub use error::SpatialError;
pub use filter::{FilterKind, KalmanSmoother, MovingAverage, TemporalFilter};
pub use height::{Height, HeightUnit};
pub use lift::{DepthLifter, lift_range_normalized};
pub use pipeline::{DepthPipeline, ScalePipeline, SpatialFrame, SpatialSession};
pub use scale::{apply_scale, calibrate, try_calibrate};
pub use smooth::TemporalSmoother;
