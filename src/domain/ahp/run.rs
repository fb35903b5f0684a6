//! Recommendation runs - immutable snapshots of one calculation.

use serde::{Deserialize, Serialize};

use super::{
    AhpReport, AlternativeWeights, ConsistencyMetrics, CriterionWeight, RankedAlternative,
    Recommendation, ScoringStrategy,
};
use crate::domain::foundation::{RunId, Timestamp, UserId};

/// A run ready to be persisted. The recorder assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecommendationRun {
    pub user_id: UserId,
    pub strategy: ScoringStrategy,
    pub criteria_weights: Vec<CriterionWeight>,
    pub criteria_consistency: ConsistencyMetrics,
    pub alternative_weights: Option<Vec<AlternativeWeights>>,
    pub final_ranking: Vec<RankedAlternative>,
}

impl NewRecommendationRun {
    /// Snapshot of a report for `user_id`.
    pub fn from_report(user_id: UserId, report: &AhpReport) -> Self {
        Self {
            user_id,
            strategy: report.strategy,
            criteria_weights: report.criteria.clone(),
            criteria_consistency: report.consistency,
            alternative_weights: report.alternative_weights.clone(),
            final_ranking: report.ranking.clone(),
        }
    }
}

/// A persisted run. Never mutated; recalculating creates a new run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRun {
    id: RunId,
    user_id: UserId,
    strategy: ScoringStrategy,
    criteria_weights: Vec<CriterionWeight>,
    criteria_consistency: ConsistencyMetrics,
    alternative_weights: Option<Vec<AlternativeWeights>>,
    final_ranking: Vec<RankedAlternative>,
    created_at: Timestamp,
}

impl RecommendationRun {
    /// Seals a new run with its storage-assigned identity.
    pub fn record(run: NewRecommendationRun, id: RunId, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: run.user_id,
            strategy: run.strategy,
            criteria_weights: run.criteria_weights,
            criteria_consistency: run.criteria_consistency,
            alternative_weights: run.alternative_weights,
            final_ranking: run.final_ranking,
            created_at,
        }
    }

    pub fn id(&self) -> &RunId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    pub fn criteria_weights(&self) -> &[CriterionWeight] {
        &self.criteria_weights
    }

    pub fn criteria_consistency(&self) -> &ConsistencyMetrics {
        &self.criteria_consistency
    }

    pub fn alternative_weights(&self) -> Option<&[AlternativeWeights]> {
        self.alternative_weights.as_deref()
    }

    pub fn final_ranking(&self) -> &[RankedAlternative] {
        &self.final_ranking
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_ranking(&self.final_ranking)
    }
}
