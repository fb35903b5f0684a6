//! AHP Module - Analytic Hierarchy Process computation engine.
//!
//! Turns a user's pairwise judgments (and optionally direct ratings) into
//! criteria weights, consistency metrics and a ranked list of alternatives.
//!
//! # Components
//!
//! - `MatrixBuilder` - Sparse judgments → dense reciprocal matrix
//! - `Normalizer` - Column-stochastic rescaling
//! - `PriorityVectorCalculator` - Row means of the normalized matrix
//! - `ConsistencyChecker` - λmax, CI and CR against a random index table
//! - `HierarchyAggregator` - Two-level orchestration and final ranking
//!
//! # Design Philosophy
//!
//! Everything here is pure and synchronous. Data arrives already fetched
//! through the ports; the only side effect of a calculation (persisting
//! the run) belongs to the application layer.

mod aggregator;
mod consistency;
mod errors;
mod matrix;
mod model;
mod normalizer;
mod outcome;
mod priority;
mod run;

pub use aggregator::{DecisionData, HierarchyAggregator, SolvedMatrix};
pub use consistency::{
    ConsistencyChecker, ConsistencyConfig, ConsistencyMetrics, RandomIndexTable,
    DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_RANDOM_INDEX_FALLBACK, SAATY_RANDOM_INDEX,
};
pub use errors::{AhpError, ValidationFailure};
pub use matrix::{ComparisonMatrix, MatrixBuilder};
pub use model::{
    Alternative, AlternativeJudgment, CriteriaJudgment, Criterion, DirectRating,
    PairwiseJudgment,
};
pub use normalizer::{NormalizedMatrix, Normalizer};
pub use outcome::{
    AhpOutcome, AhpReport, AlternativeWeight, AlternativeWeights, CriterionWeight,
    InconsistencyWarning, RankedAlternative, Recommendation, ScoreContribution, ScoringStrategy,
};
pub use priority::{PriorityVector, PriorityVectorCalculator};
pub use run::{NewRecommendationRun, RecommendationRun};
