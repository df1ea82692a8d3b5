use {
    crate::{
        consolidate::{ConsolidatedAnalysis, ModelResult, ModelType, consolidate},
        error::PoseError,
        frame::PoseFrame,
        goal::{GoalAnalyzer, TrainingGoal},
        motion::MotionMatcher,
    },
    serde::{Deserialize, Serialize},
};

/// A frame as reported by one pose model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDetection {
    pub model: ModelType,
    pub pose: PoseFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub model_results: Vec<ModelResult>,
    pub consolidated: ConsolidatedAnalysis,
}

/// Runs motion matching and goal feedback over model detections.
#[derive(Default)]
pub struct Analyzer {
    matcher: MotionMatcher,
    goals: GoalAnalyzer,
}

impl Analyzer {
    pub fn new(matcher: MotionMatcher, goals: GoalAnalyzer) -> Self {
        Self { matcher, goals }
    }

    pub fn matcher(&self) -> &MotionMatcher {
        &self.matcher
    }

    /// Builds the result of a single model pass.
    pub fn evaluate(
        &self,
        model: ModelType,
        frame: PoseFrame,
        goal: TrainingGoal,
    ) -> Result<ModelResult, PoseError> {
        let feedback = self.goals.analyze(&frame, goal)?;
        let motion = self.matcher.detect(&frame);
        base::log_debug!(
            "{}: {} at {:.1}% ({})",
            model,
            motion.name,
            motion.confidence,
            motion.phase.name()
        );
        Ok(ModelResult {
            model_name: model,
            confidence: motion.confidence.clamp(0.0, 100.0),
            detected_motion: motion.name,
            recommendations: feedback.recommendations,
            improvements: feedback.improvements,
            score: feedback.score,
            pose_data: frame,
        })
    }

    /// Evaluates every detection and consolidates them.
    ///
    /// Detections from models that failed must be dropped by the caller;
    /// an empty list fails with `EmptyModelResults`.
    pub fn analyze(
        &self,
        detections: Vec<ModelDetection>,
        goal: TrainingGoal,
    ) -> Result<Analysis, PoseError> {
        let model_results = detections
            .into_iter()
            .map(|d| self.evaluate(d.model, d.pose, goal))
            .collect::<Result<Vec<_>, _>>()?;
        let consolidated = consolidate(&model_results)?;
        Ok(Analysis {
            model_results,
            consolidated,
        })
    }
}

/// Single-model analysis of one frame, attributed to BlazePose.
pub fn analyze_goal(frame: PoseFrame, goal: &str) -> Result<Analysis, PoseError> {
    let goal: TrainingGoal = goal.parse()?;
    Analyzer::default().analyze(
        vec![ModelDetection {
            model: ModelType::BlazePose,
            pose: frame,
        }],
        goal,
    )
}
