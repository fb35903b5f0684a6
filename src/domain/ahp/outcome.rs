//! Engine results: weights, consistency, ranking and the serializable report.

use serde::{Deserialize, Serialize};

use super::ConsistencyMetrics;
use crate::domain::foundation::{AlternativeId, CriterionId};

/// How alternatives were scored in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Two-level AHP: pairwise alternative judgments per criterion.
    FullPairwise,
    /// Single level: criteria weights times raw alternative ratings.
    DirectRating,
}

impl ScoringStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategy::FullPairwise => "full_pairwise",
            ScoringStrategy::DirectRating => "direct_rating",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full_pairwise" => Some(ScoringStrategy::FullPairwise),
            "direct_rating" => Some(ScoringStrategy::DirectRating),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion_id: CriterionId,
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeWeight {
    pub alternative_id: AlternativeId,
    pub name: String,
    pub weight: f64,
}

/// Alternative-level priorities under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeWeights {
    pub criterion_id: CriterionId,
    pub criterion_name: String,
    pub weights: Vec<AlternativeWeight>,
    pub consistency: ConsistencyMetrics,
}

/// What one criterion added to an alternative's final score.
///
/// `local_value` is the alternative's weight under the criterion for
/// pairwise scoring, or its raw rating for direct scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub criterion_id: CriterionId,
    pub criterion_name: String,
    pub criterion_weight: f64,
    pub local_value: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative_id: AlternativeId,
    pub name: String,
    pub score: f64,
    pub breakdown: Vec<ScoreContribution>,
}

/// Top-ranked alternative, or an explicit absence of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation {
    Recommended {
        alternative_id: AlternativeId,
        name: String,
        message: String,
    },
    NoRecommendation,
}

impl Recommendation {
    pub fn from_ranking(ranking: &[RankedAlternative]) -> Self {
        match ranking.first() {
            Some(top) => Recommendation::Recommended {
                alternative_id: top.alternative_id,
                name: top.name.clone(),
                message: format!(
                    "Based on your preferences, the recommended alternative is: {}",
                    top.name
                ),
            },
            None => Recommendation::NoRecommendation,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Recommendation::Recommended { name, .. } => Some(name),
            Recommendation::NoRecommendation => None,
        }
    }
}

/// A matrix whose CR exceeded the threshold. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct InconsistencyWarning {
    /// `None` for the criteria matrix.
    pub criterion_id: Option<CriterionId>,
    pub cr: f64,
}

/// Full-precision result of one aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct AhpOutcome {
    pub strategy: ScoringStrategy,
    pub criteria: Vec<CriterionWeight>,
    pub consistency: ConsistencyMetrics,
    /// Present only for [`ScoringStrategy::FullPairwise`].
    pub alternative_weights: Option<Vec<AlternativeWeights>>,
    /// Sorted by score descending, ties by alternative id ascending.
    pub ranking: Vec<RankedAlternative>,
}

impl AhpOutcome {
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_ranking(&self.ranking)
    }

    pub fn inconsistencies(&self) -> Vec<InconsistencyWarning> {
        let mut warnings = Vec::new();
        if !self.consistency.is_consistent {
            warnings.push(InconsistencyWarning {
                criterion_id: None,
                cr: self.consistency.cr,
            });
        }
        for level in self.alternative_weights.iter().flatten() {
            if !level.consistency.is_consistent {
                warnings.push(InconsistencyWarning {
                    criterion_id: Some(level.criterion_id),
                    cr: level.consistency.cr,
                });
            }
        }
        warnings
    }

    pub fn all_consistent(&self) -> bool {
        self.inconsistencies().is_empty()
    }

    /// Serializable report, rounded to 4 decimal places.
    pub fn report(&self) -> AhpReport {
        AhpReport {
            strategy: self.strategy,
            criteria: self
                .criteria
                .iter()
                .map(|c| CriterionWeight {
                    weight: round4(c.weight),
                    ..c.clone()
                })
                .collect(),
            consistency: round_metrics(&self.consistency),
            alternative_weights: self.alternative_weights.as_ref().map(|levels| {
                levels
                    .iter()
                    .map(|level| AlternativeWeights {
                        criterion_id: level.criterion_id,
                        criterion_name: level.criterion_name.clone(),
                        weights: level
                            .weights
                            .iter()
                            .map(|w| AlternativeWeight {
                                weight: round4(w.weight),
                                ..w.clone()
                            })
                            .collect(),
                        consistency: round_metrics(&level.consistency),
                    })
                    .collect()
            }),
            ranking: self
                .ranking
                .iter()
                .map(|r| RankedAlternative {
                    alternative_id: r.alternative_id,
                    name: r.name.clone(),
                    score: round4(r.score),
                    breakdown: r
                        .breakdown
                        .iter()
                        .map(|b| ScoreContribution {
                            criterion_id: b.criterion_id,
                            criterion_name: b.criterion_name.clone(),
                            criterion_weight: round4(b.criterion_weight),
                            local_value: round4(b.local_value),
                            contribution: round4(b.contribution),
                        })
                        .collect(),
                })
                .collect(),
            recommendation: self.recommendation(),
        }
    }
}

/// Engine output contract: what callers serialize and what runs persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpReport {
    pub strategy: ScoringStrategy,
    pub criteria: Vec<CriterionWeight>,
    pub consistency: ConsistencyMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_weights: Option<Vec<AlternativeWeights>>,
    pub ranking: Vec<RankedAlternative>,
    pub recommendation: Recommendation,
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn round_metrics(metrics: &ConsistencyMetrics) -> ConsistencyMetrics {
    ConsistencyMetrics {
        lambda_max: round4(metrics.lambda_max),
        ci: round4(metrics.ci),
        cr: round4(metrics.cr),
        is_consistent: metrics.is_consistent,
    }
}
