//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer loads data through the ports, runs the engine and records
//! results. Command handlers (calculate, submit) are kept apart from query
//! handlers (history, stored judgments).

pub mod handlers;

pub use handlers::{
    CalculateRecommendationCommand, CalculateRecommendationHandler, CalculateRecommendationResult,
    GetRunHistoryHandler, GetRunHistoryQuery, GetUserJudgmentsHandler, GetUserJudgmentsQuery,
    SubmitAlternativeJudgmentsCommand, SubmitAlternativeJudgmentsHandler,
    SubmitCriteriaJudgmentsCommand, SubmitCriteriaJudgmentsHandler, SubmitDirectRatingsCommand,
    SubmitDirectRatingsHandler, SubmitJudgmentsResult, UserJudgments,
};
