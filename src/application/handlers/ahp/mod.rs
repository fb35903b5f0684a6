//! AHP command and query handlers.

mod calculate_recommendation;
mod get_run_history;
mod get_user_judgments;
mod submit_judgments;
mod submit_ratings;

pub use calculate_recommendation::{
    CalculateRecommendationCommand, CalculateRecommendationHandler, CalculateRecommendationResult,
};
pub use get_run_history::{GetRunHistoryHandler, GetRunHistoryQuery};
pub use get_user_judgments::{GetUserJudgmentsHandler, GetUserJudgmentsQuery, UserJudgments};
pub use submit_judgments::{
    SubmitAlternativeJudgmentsCommand, SubmitAlternativeJudgmentsHandler,
    SubmitCriteriaJudgmentsCommand, SubmitCriteriaJudgmentsHandler, SubmitJudgmentsResult,
};
pub use submit_ratings::{SubmitDirectRatingsCommand, SubmitDirectRatingsHandler};
