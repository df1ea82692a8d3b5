use {
    anyhow::Context,
    base::*,
    pose::{Analysis, Analyzer, Joint, Keypoints3D, ModelDetection, ModelType, TrainingGoal},
    serde::{Deserialize, Serialize},
    spatial::{SpatialConfig, SpatialFrame, SpatialSession, kinematics},
    std::env,
};

const DEFAULT_RECORDING_PATH: &str = "data/sample.json";
const DEFAULT_FPS: f64 = 30.0;

/// A recorded session: detections from one or more pose models per frame.
#[derive(Debug, Deserialize)]
struct Recording {
    goal: String,
    #[serde(default)]
    fps: Option<f64>,
    #[serde(default)]
    config: SpatialConfig,
    frames: Vec<RecordedFrame>,
}

#[derive(Debug, Deserialize)]
struct RecordedFrame {
    detections: Vec<ModelDetection>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameReport {
    index: usize,
    analysis: Analysis,
    spatial: Option<SpatialFrame>,
    fastest_joint: Option<(Joint, f64)>,
}

/// Picks the detection used for 3D reconstruction: BlazePose when present,
/// since it is the only model that reports heels.
fn spatial_source(detections: &[ModelDetection]) -> Option<&ModelDetection> {
    detections
        .iter()
        .find(|d| d.model == ModelType::BlazePose)
        .or_else(|| detections.first())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    base::init_stdout_logger();
    base::set_max_level(Level::Info);

    let path = env::args()
        .nth(1)
        .or_else(|| env::var("POSE_RECORDING").ok())
        .unwrap_or_else(|| DEFAULT_RECORDING_PATH.to_string());
    log_info!("Reading recording {}", path);

    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path))?;
    let recording: Recording = serde_json::from_str(&text)?;
    let goal: TrainingGoal = recording.goal.parse()?;
    let fps = recording.fps.unwrap_or(DEFAULT_FPS);

    let analyzer = Analyzer::default();
    let mut session = SpatialSession::from_config(&recording.config)?;
    let mut previous: Option<Keypoints3D> = None;
    let mut reports = Vec::with_capacity(recording.frames.len());

    for (index, frame) in recording.frames.into_iter().enumerate() {
        if frame.detections.is_empty() {
            log_warn!("Frame {}: no detections, skipping", index);
            continue;
        }

        let spatial = spatial_source(&frame.detections).map(|d| session.process(&d.pose));
        let fastest_joint = match (&previous, &spatial) {
            (Some(prev), Some(current)) => {
                kinematics::peak_speed(&kinematics::velocity(prev, &current.scaled, fps))
            }
            _ => None,
        };
        previous = spatial.as_ref().map(|s| s.scaled.clone());

        let analysis = analyzer.analyze(frame.detections, goal)?;
        log_info!(
            "Frame {}: {} ({:.0}%), score {}",
            index,
            analysis.consolidated.detected_motion,
            analysis.consolidated.confidence,
            analysis.consolidated.score
        );
        reports.push(FrameReport {
            index,
            analysis,
            spatial,
            fastest_joint,
        });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
