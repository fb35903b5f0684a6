//! AHP-specific error types.

use thiserror::Error;

use crate::domain::foundation::{CriterionId, DomainError, ErrorCode};

/// A precondition that failed before any matrix work began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("At least 2 criteria are required, found {found}")]
    InsufficientCriteria { found: usize },

    #[error("No pairwise comparison data for criteria. Please compare criteria first.")]
    NoCriteriaJudgments,

    #[error("No alternative comparison data. Please compare alternatives first.")]
    NoAlternativeJudgments,

    #[error("No rating data. Please rate alternatives first.")]
    NoDirectRatings,

    #[error("No alternative comparisons or ratings. Please compare or rate alternatives first.")]
    NoAlternativeData,
}

/// Errors raised by the AHP engine and its handlers.
#[derive(Debug, Clone, Error)]
pub enum AhpError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Invalid judgment {subject_a} vs {subject_b}: value must be positive, got {value}")]
    InvalidJudgment {
        subject_a: String,
        subject_b: String,
        value: f64,
    },

    #[error("Invalid rating for alternative {alternative} under criterion {criterion}: score must be finite, got {score}")]
    InvalidRating {
        alternative: String,
        criterion: String,
        score: f64,
    },

    #[error("Unknown criterion: {0}")]
    UnknownCriterion(CriterionId),

    /// Storage failure, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl AhpError {
    pub fn invalid_judgment(
        subject_a: impl ToString,
        subject_b: impl ToString,
        value: f64,
    ) -> Self {
        AhpError::InvalidJudgment {
            subject_a: subject_a.to_string(),
            subject_b: subject_b.to_string(),
            value,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::Validation(ValidationFailure::InsufficientCriteria { .. }) => {
                ErrorCode::InsufficientCriteria
            }
            AhpError::Validation(_) => ErrorCode::MissingJudgments,
            AhpError::InvalidJudgment { .. } => ErrorCode::InvalidJudgment,
            AhpError::InvalidRating { .. } => ErrorCode::InvalidRating,
            AhpError::UnknownCriterion(_) => ErrorCode::CriterionNotFound,
            AhpError::Storage(err) => err.code,
        }
    }

    /// True for failures the caller can fix by changing its input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AhpError::Storage(_))
    }
}
