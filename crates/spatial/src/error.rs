use {pose::Joint, std::fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// Zero or non-finite extent where a span is required.
    DegenerateGeometry(String),
    MissingAnchorKeypoints(Vec<Joint>),
    InvalidHeight(f64),
    InvalidAlpha(f64),
    Config(String),
    Io(String),
}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialError::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {msg}"),
            SpatialError::MissingAnchorKeypoints(joints) => {
                let names: Vec<&str> = joints.iter().map(|j| j.name()).collect();
                write!(f, "missing anchor keypoints: {}", names.join(", "))
            }
            SpatialError::InvalidHeight(value) => write!(f, "invalid height: {value}"),
            SpatialError::InvalidAlpha(value) => {
                write!(f, "smoothing alpha must be in (0, 1), got {value}")
            }
            SpatialError::Config(msg) => write!(f, "config error: {msg}"),
            SpatialError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for SpatialError {}

impl From<std::io::Error> for SpatialError {
    fn from(err: std::io::Error) -> Self {
        SpatialError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpatialError {
    fn from(err: serde_json::Error) -> Self {
        SpatialError::Config(err.to_string())
    }
}
