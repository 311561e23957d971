use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Unsupported workout type: {0:?}")]
    UnsupportedWorkoutType(String),

    #[error("Invalid parameters for {tag}: {reason}")]
    InvalidParameters { tag: String, reason: String },

    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),
}

impl TrainingError {
    pub fn invalid(tag: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrainingError>;
