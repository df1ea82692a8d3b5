mod signatures;

pub use signatures::{DiscusThrow, JavelinThrow, ShotPut};

use {
    crate::frame::PoseFrame,
    serde::{Deserialize, Serialize},
};

/// A scorable motion pattern.
pub trait MotionSignature: Send + Sync {
    fn name(&self) -> &'static str;

    /// How well `frame` matches this motion. The matcher clamps the result to
    /// [0.0, 1.0]; a frame missing the joints a signature needs scores 0.
    fn score(&self, frame: &PoseFrame) -> f64;

    fn phase(&self, _frame: &PoseFrame) -> Phase {
        Phase::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    WindUp,
    Transition,
    Release,
    Preparation,
    Approach,
    Unknown,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::WindUp => "wind-up",
            Phase::Transition => "transition",
            Phase::Release => "release",
            Phase::Preparation => "preparation",
            Phase::Approach => "approach",
            Phase::Unknown => "unknown",
        }
    }

    /// Coaching cues for the phase.
    pub fn key_points(self) -> &'static [&'static str] {
        match self {
            Phase::WindUp => &["Initiate rotation", "Load hips", "Keep arms wide"],
            Phase::Transition => &[
                "Drive from ground",
                "Maintain arm position",
                "Rotate core",
            ],
            Phase::Release => &[
                "Explosive hip rotation",
                "Follow through",
                "Balance finish",
            ],
            Phase::Preparation | Phase::Approach | Phase::Unknown => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedMotion {
    pub name: String,
    /// Winning score scaled to [0, 100].
    pub confidence: f64,
    pub phase: Phase,
    pub key_points: Vec<String>,
}

/// Scores a frame against an ordered catalogue of signatures.
pub struct MotionMatcher {
    signatures: Vec<Box<dyn MotionSignature>>,
}

impl Default for MotionMatcher {
    fn default() -> Self {
        Self::new(vec![
            Box::new(DiscusThrow),
            Box::new(ShotPut),
            Box::new(JavelinThrow),
        ])
    }
}

impl MotionMatcher {
    /// Ties between signatures go to the one listed first.
    pub fn new(signatures: Vec<Box<dyn MotionSignature>>) -> Self {
        Self { signatures }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.signatures.iter().map(|s| s.name()).collect()
    }

    /// Clamped score of every signature, in catalogue order.
    pub fn scores(&self, frame: &PoseFrame) -> Vec<(&'static str, f64)> {
        self.signatures
            .iter()
            .map(|s| (s.name(), clamp_unit(s.score(frame))))
            .collect()
    }

    pub fn detect(&self, frame: &PoseFrame) -> DetectedMotion {
        let mut best: Option<(&dyn MotionSignature, f64)> = None;
        for signature in &self.signatures {
            let score = clamp_unit(signature.score(frame));
            base::log_debug!("motion {} scored {:.3}", signature.name(), score);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((signature.as_ref(), score));
            }
        }

        let Some((signature, score)) = best else {
            return DetectedMotion {
                name: Phase::Unknown.name().to_string(),
                confidence: 0.0,
                phase: Phase::Unknown,
                key_points: Vec::new(),
            };
        };

        let phase = signature.phase(frame);
        DetectedMotion {
            name: signature.name().to_string(),
            confidence: score * 100.0,
            phase,
            key_points: phase.key_points().iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn clamp_unit(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
