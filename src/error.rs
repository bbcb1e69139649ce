use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no feasible path: {0}")]
    NoFeasiblePath(String),
    #[error("input too large: {points} points exceeds the exact solver limit of {limit}")]
    InputTooLarge { points: usize, limit: usize },
}

pub type PlannerResult<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn no_feasible_path(message: impl Into<String>) -> Self {
        Self::NoFeasiblePath(message.into())
    }
}
