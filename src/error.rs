use thiserror::Error;

/// Errors raised while building or summarising a single workout package.
///
/// None of these abort a batch run; the driver reports them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// The package code does not name a known workout kind.
    #[error("Invalid workout code: {0:?}")]
    InvalidWorkoutCode(String),

    /// The data list does not fit the constructor of a known workout kind.
    #[error("Invalid arguments for {code}: {reason}")]
    InvalidArguments { code: String, reason: String },

    /// Nothing to report on, usually because construction failed upstream.
    #[error("Invalid activity: no workout to report on")]
    InvalidActivity,

    /// The workout kind has no calorie formula.
    #[error("Calorie formula is not implemented for {0}")]
    UnimplementedFormula(&'static str),
}

impl WorkoutError {
    pub(crate) fn invalid_args(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            code: code.into(),
            reason: reason.into(),
        }
    }
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_message() {
        let err = WorkoutError::InvalidWorkoutCode("XYZ".to_string());
        assert_eq!(err.to_string(), "Invalid workout code: \"XYZ\"");
    }

    #[test]
    fn test_invalid_args_message() {
        let err = WorkoutError::invalid_args("RUN", "expected 3 values, got 2");
        assert!(err.to_string().contains("RUN"));
        assert!(err.to_string().contains("expected 3 values, got 2"));
    }
}
