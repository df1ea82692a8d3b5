use {
    crate::{error::PoseError, frame::PoseFrame},
    serde::{Deserialize, Serialize},
    std::{collections::HashSet, fmt},
};

/// Pose-estimation model that produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    BlazePose,
    MoveNet,
    PoseNet,
    OpenPose,
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelType::BlazePose => write!(f, "blazepose"),
            ModelType::MoveNet => write!(f, "movenet"),
            ModelType::PoseNet => write!(f, "posenet"),
            ModelType::OpenPose => write!(f, "openpose"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResult {
    pub model_name: ModelType,
    /// In [0, 100].
    pub confidence: f64,
    pub detected_motion: String,
    pub recommendations: Vec<String>,
    pub improvements: Vec<String>,
    /// In [0, 100].
    pub score: f64,
    pub pose_data: PoseFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedAnalysis {
    pub detected_motion: String,
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub improvements: Vec<String>,
    pub score: f64,
    /// Set when every confidence was zero and `score` is an unweighted mean.
    #[serde(default)]
    pub degraded: bool,
}

/// Merges per-model results into one verdict.
///
/// The motion comes from the most confident result (first one on ties), the
/// score is the confidence-weighted mean rounded to an integer, and feedback
/// lists are concatenated with exact duplicates removed.
pub fn consolidate(results: &[ModelResult]) -> Result<ConsolidatedAnalysis, PoseError> {
    let Some(first) = results.first() else {
        return Err(PoseError::EmptyModelResults);
    };

    let best = results[1..]
        .iter()
        .fold(first, |best, r| if r.confidence > best.confidence { r } else { best });

    let weight_sum: f64 = results.iter().map(|r| r.confidence / 100.0).sum();
    let (score, degraded) = if weight_sum > 0.0 && weight_sum.is_finite() {
        let weighted: f64 = results.iter().map(|r| r.score * r.confidence / 100.0).sum();
        (weighted / weight_sum, false)
    } else {
        base::log_warn!(
            "consolidating {} results with zero total confidence, using unweighted mean",
            results.len()
        );
        let sum: f64 = results.iter().map(|r| r.score).sum();
        (sum / results.len() as f64, true)
    };

    Ok(ConsolidatedAnalysis {
        detected_motion: best.detected_motion.clone(),
        confidence: best.confidence,
        recommendations: dedup(results.iter().flat_map(|r| &r.recommendations)),
        improvements: dedup(results.iter().flat_map(|r| &r.improvements)),
        score: score.round().clamp(0.0, 100.0),
        degraded,
    })
}

fn dedup<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}
