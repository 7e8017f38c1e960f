use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("{criterion} rating out of range [1, 5]: {value}")]
    RatingOutOfRange { criterion: &'static str, value: f64 },

    #[error("{criterion} rating is not a finite number")]
    NonFiniteRating { criterion: &'static str },

    #[error("{criterion} rating too large to score: {value}")]
    UnscorableRating { criterion: &'static str, value: f64 },

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("supplier name must not be empty")]
    EmptySupplier,

    #[error("evaluation not found: {0}")]
    EvaluationNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("evaluation log is corrupt: {0}")]
    CorruptLog(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvalError {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EvalError::RatingOutOfRange { .. }
                | EvalError::NonFiniteRating { .. }
                | EvalError::UnscorableRating { .. }
                | EvalError::InvalidDate(_)
                | EvalError::EmptySupplier
                | EvalError::EvaluationNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
