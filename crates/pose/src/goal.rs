use {
    crate::{error::PoseError, frame::PoseFrame},
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, fmt, str::FromStr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingGoal {
    Technique,
    Strength,
    Endurance,
    Flexibility,
}

impl TrainingGoal {
    pub const ALL: [TrainingGoal; 4] = [
        TrainingGoal::Technique,
        TrainingGoal::Strength,
        TrainingGoal::Endurance,
        TrainingGoal::Flexibility,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TrainingGoal::Technique => "technique",
            TrainingGoal::Strength => "strength",
            TrainingGoal::Endurance => "endurance",
            TrainingGoal::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrainingGoal {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingGoal::ALL
            .into_iter()
            .find(|goal| goal.name() == s)
            .ok_or_else(|| PoseError::InvalidGoal(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFeedback {
    pub recommendations: Vec<String>,
    pub improvements: Vec<String>,
    /// Baseline score in [0, 100].
    pub score: f64,
}

/// Produces goal-specific feedback for a frame.
pub trait GoalStrategy: Send + Sync {
    fn evaluate(&self, frame: &PoseFrame) -> GoalFeedback;
}

/// Fixed feedback that ignores the frame.
#[derive(Debug, Clone, Copy)]
pub struct StaticProfile {
    pub recommendations: &'static [&'static str],
    pub improvements: &'static [&'static str],
    pub score: f64,
}

impl StaticProfile {
    pub const TECHNIQUE: StaticProfile = StaticProfile {
        recommendations: &[
            "Maintain neutral spine alignment throughout movement",
            "Keep shoulders back and chest up",
            "Focus on controlled, deliberate movements",
        ],
        improvements: &[
            "Work on hip hinge mechanics",
            "Improve knee tracking over toes",
            "Increase core engagement",
        ],
        score: 85.0,
    };

    pub const STRENGTH: StaticProfile = StaticProfile {
        recommendations: &[
            "Increase time under tension",
            "Focus on eccentric phase of movement",
            "Maintain proper breathing patterns",
        ],
        improvements: &[
            "Add progressive overload",
            "Improve stability at end ranges",
            "Work on power development",
        ],
        score: 78.0,
    };

    pub const ENDURANCE: StaticProfile = StaticProfile {
        recommendations: &[
            "Maintain consistent pace",
            "Focus on breathing rhythm",
            "Keep proper form during fatigue",
        ],
        improvements: &[
            "Build aerobic capacity",
            "Improve movement efficiency",
            "Develop better pacing strategy",
        ],
        score: 82.0,
    };

    pub const FLEXIBILITY: StaticProfile = StaticProfile {
        recommendations: &[
            "Hold stretches for 30-60 seconds",
            "Focus on breathing during stretches",
            "Maintain alignment in end ranges",
        ],
        improvements: &[
            "Increase range of motion in hips",
            "Work on shoulder mobility",
            "Improve ankle flexibility",
        ],
        score: 75.0,
    };

    pub fn for_goal(goal: TrainingGoal) -> StaticProfile {
        match goal {
            TrainingGoal::Technique => Self::TECHNIQUE,
            TrainingGoal::Strength => Self::STRENGTH,
            TrainingGoal::Endurance => Self::ENDURANCE,
            TrainingGoal::Flexibility => Self::FLEXIBILITY,
        }
    }
}

impl GoalStrategy for StaticProfile {
    fn evaluate(&self, _frame: &PoseFrame) -> GoalFeedback {
        GoalFeedback {
            recommendations: self.recommendations.iter().map(|s| s.to_string()).collect(),
            improvements: self.improvements.iter().map(|s| s.to_string()).collect(),
            score: self.score.clamp(0.0, 100.0),
        }
    }
}

/// Goal-keyed registry of feedback strategies.
pub struct GoalAnalyzer {
    strategies: HashMap<TrainingGoal, Box<dyn GoalStrategy>>,
}

impl Default for GoalAnalyzer {
    fn default() -> Self {
        let strategies = TrainingGoal::ALL
            .into_iter()
            .map(|goal| {
                let strategy: Box<dyn GoalStrategy> = Box::new(StaticProfile::for_goal(goal));
                (goal, strategy)
            })
            .collect();
        Self { strategies }
    }
}

impl GoalAnalyzer {
    /// Replaces the strategy used for `goal`.
    pub fn with_strategy(mut self, goal: TrainingGoal, strategy: Box<dyn GoalStrategy>) -> Self {
        self.strategies.insert(goal, strategy);
        self
    }

    pub fn analyze(&self, frame: &PoseFrame, goal: TrainingGoal) -> Result<GoalFeedback, PoseError> {
        let strategy = self
            .strategies
            .get(&goal)
            .ok_or_else(|| PoseError::InvalidGoal(goal.to_string()))?;
        let mut feedback = strategy.evaluate(frame);
        feedback.score = feedback.score.clamp(0.0, 100.0);
        Ok(feedback)
    }

    /// Parses `goal` first; an unknown name fails with `InvalidGoal`.
    pub fn analyze_named(&self, frame: &PoseFrame, goal: &str) -> Result<GoalFeedback, PoseError> {
        self.analyze(frame, goal.parse()?)
    }
}
