//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ahp;

pub use ahp::{
    CalculateRecommendationCommand, CalculateRecommendationHandler, CalculateRecommendationResult,
    GetRunHistoryHandler, GetRunHistoryQuery, GetUserJudgmentsHandler, GetUserJudgmentsQuery,
    SubmitAlternativeJudgmentsCommand, SubmitAlternativeJudgmentsHandler,
    SubmitCriteriaJudgmentsCommand, SubmitCriteriaJudgmentsHandler, SubmitDirectRatingsCommand,
    SubmitDirectRatingsHandler, SubmitJudgmentsResult, UserJudgments,
};
