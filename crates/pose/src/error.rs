use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PoseError {
    InvalidGoal(String),
    EmptyModelResults,
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::InvalidGoal(goal) => write!(f, "invalid training goal: {goal:?}"),
            PoseError::EmptyModelResults => write!(f, "no model results to consolidate"),
        }
    }
}

impl std::error::Error for PoseError {}
