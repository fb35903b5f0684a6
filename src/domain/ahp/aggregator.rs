//! Hierarchy Aggregator - two-level orchestration and final ranking.
//!
//! One entry point serves both scoring strategies so the criteria-level
//! math exists exactly once.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Display;

use super::{
    AhpError, AhpOutcome, Alternative, AlternativeJudgment, AlternativeWeight,
    AlternativeWeights, ComparisonMatrix, ConsistencyChecker, ConsistencyConfig,
    ConsistencyMetrics, CriteriaJudgment, Criterion, CriterionWeight, DirectRating,
    MatrixBuilder, Normalizer, PairwiseJudgment, PriorityVector, PriorityVectorCalculator,
    RankedAlternative, ScoreContribution, ScoringStrategy, ValidationFailure,
};
use crate::domain::foundation::AlternativeId;

/// Everything one user has stored, as read from the collaborators.
#[derive(Debug, Clone, Default)]
pub struct DecisionData {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    pub criteria_judgments: Vec<CriteriaJudgment>,
    pub alternative_judgments: Vec<AlternativeJudgment>,
    pub ratings: Vec<DirectRating>,
}

impl DecisionData {
    /// Picks the strategy the stored data supports, preferring full
    /// pairwise when alternative judgments exist.
    pub fn detect_strategy(&self) -> Option<ScoringStrategy> {
        if !self.alternative_judgments.is_empty() {
            Some(ScoringStrategy::FullPairwise)
        } else if !self.ratings.is_empty() {
            Some(ScoringStrategy::DirectRating)
        } else {
            None
        }
    }
}

/// A comparison matrix together with its weights and consistency.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedMatrix {
    pub matrix: ComparisonMatrix,
    pub weights: PriorityVector,
    pub consistency: ConsistencyMetrics,
}

/// Runs the AHP pipeline over criteria and alternatives.
#[derive(Debug, Clone, Default)]
pub struct HierarchyAggregator {
    checker: ConsistencyChecker,
}

impl HierarchyAggregator {
    pub fn new(config: ConsistencyConfig) -> Self {
        Self {
            checker: ConsistencyChecker::new(config),
        }
    }

    /// Build, normalize, weigh and check one matrix.
    pub fn solve<Id, I>(&self, entities: &[Id], judgments: I) -> Result<SolvedMatrix, AhpError>
    where
        Id: PartialEq + Display,
        I: IntoIterator<Item = PairwiseJudgment<Id>>,
    {
        let matrix = MatrixBuilder::build(entities, judgments)?;
        let weights = PriorityVectorCalculator::calculate(&Normalizer::normalize(&matrix));
        let consistency = self.checker.check(&matrix, &weights);
        Ok(SolvedMatrix {
            matrix,
            weights,
            consistency,
        })
    }

    /// Validates preconditions, then scores and ranks every alternative.
    ///
    /// `requested` pins a strategy; `None` detects it from `data`.
    ///
    /// # Errors
    /// - `Validation` for fewer than 2 criteria, no criteria judgments, or
    ///   no data for the active strategy, checked in that order
    /// - `InvalidJudgment` for a pairwise value that is not a usable ratio
    /// - `InvalidRating` for a non-finite stored rating
    pub fn aggregate(
        &self,
        data: &DecisionData,
        requested: Option<ScoringStrategy>,
    ) -> Result<AhpOutcome, AhpError> {
        let strategy = Self::validate(data, requested)?;

        let criterion_ids: Vec<_> = data.criteria.iter().map(|c| c.id).collect();
        let criteria_level = self.solve(&criterion_ids, data.criteria_judgments.iter().copied())?;

        let criteria: Vec<CriterionWeight> = data
            .criteria
            .iter()
            .zip(criteria_level.weights.as_slice())
            .map(|(c, w)| CriterionWeight {
                criterion_id: c.id,
                name: c.name.clone(),
                weight: *w,
            })
            .collect();

        let (alternative_weights, ranking) = match strategy {
            ScoringStrategy::FullPairwise => {
                let levels = self.alternative_levels(data)?;
                let ranking = Self::score_pairwise(data, &criteria, &levels);
                (Some(levels), ranking)
            }
            ScoringStrategy::DirectRating => (None, Self::score_ratings(data, &criteria)?),
        };

        Ok(AhpOutcome {
            strategy,
            criteria,
            consistency: criteria_level.consistency,
            alternative_weights,
            ranking: Self::rank(ranking),
        })
    }

    fn validate(
        data: &DecisionData,
        requested: Option<ScoringStrategy>,
    ) -> Result<ScoringStrategy, ValidationFailure> {
        if data.criteria.len() < 2 {
            return Err(ValidationFailure::InsufficientCriteria {
                found: data.criteria.len(),
            });
        }
        if data.criteria_judgments.is_empty() {
            return Err(ValidationFailure::NoCriteriaJudgments);
        }

        match requested {
            Some(ScoringStrategy::FullPairwise) if data.alternative_judgments.is_empty() => {
                Err(ValidationFailure::NoAlternativeJudgments)
            }
            Some(ScoringStrategy::DirectRating) if data.ratings.is_empty() => {
                Err(ValidationFailure::NoDirectRatings)
            }
            Some(strategy) => Ok(strategy),
            None => data
                .detect_strategy()
                .ok_or(ValidationFailure::NoAlternativeData),
        }
    }

    /// One alternative-level matrix per criterion, in criteria order.
    fn alternative_levels(&self, data: &DecisionData) -> Result<Vec<AlternativeWeights>, AhpError> {
        let alternative_ids: Vec<_> = data.alternatives.iter().map(|a| a.id).collect();

        data.criteria
            .iter()
            .map(|criterion| {
                let solved = self.solve(
                    &alternative_ids,
                    data.alternative_judgments
                        .iter()
                        .filter(|j| j.criterion_id == criterion.id)
                        .map(AlternativeJudgment::as_pairwise),
                )?;

                tracing::trace!(
                    criterion_id = %criterion.id,
                    cr = solved.consistency.cr,
                    "alternative level solved"
                );

                Ok(AlternativeWeights {
                    criterion_id: criterion.id,
                    criterion_name: criterion.name.clone(),
                    weights: data
                        .alternatives
                        .iter()
                        .zip(solved.weights.as_slice())
                        .map(|(a, w)| AlternativeWeight {
                            alternative_id: a.id,
                            name: a.name.clone(),
                            weight: *w,
                        })
                        .collect(),
                    consistency: solved.consistency,
                })
            })
            .collect()
    }

    /// `score[a] = Σ_c criteria_weight[c] * alternative_weight[c][a]`.
    fn score_pairwise(
        data: &DecisionData,
        criteria: &[CriterionWeight],
        levels: &[AlternativeWeights],
    ) -> Vec<RankedAlternative> {
        data.alternatives
            .iter()
            .enumerate()
            .map(|(index, alternative)| {
                let breakdown: Vec<ScoreContribution> = criteria
                    .iter()
                    .zip(levels)
                    .map(|(criterion, level)| {
                        let local = level.weights[index].weight;
                        ScoreContribution {
                            criterion_id: criterion.criterion_id,
                            criterion_name: criterion.name.clone(),
                            criterion_weight: criterion.weight,
                            local_value: local,
                            contribution: criterion.weight * local,
                        }
                    })
                    .collect();

                RankedAlternative {
                    alternative_id: alternative.id,
                    name: alternative.name.clone(),
                    score: breakdown.iter().map(|b| b.contribution).sum(),
                    breakdown,
                }
            })
            .collect()
    }

    /// Accumulates `criteria_weight * rating` per alternative. Only
    /// alternatives whose total ends up above zero are ranked.
    fn score_ratings(
        data: &DecisionData,
        criteria: &[CriterionWeight],
    ) -> Result<Vec<RankedAlternative>, AhpError> {
        let mut contributions: HashMap<AlternativeId, Vec<ScoreContribution>> = HashMap::new();

        for rating in &data.ratings {
            if !rating.score.is_finite() {
                return Err(AhpError::InvalidRating {
                    alternative: rating.alternative_id.to_string(),
                    criterion: rating.criterion_id.to_string(),
                    score: rating.score,
                });
            }
            let Some(criterion) = criteria.iter().find(|c| c.criterion_id == rating.criterion_id)
            else {
                continue;
            };
            if !data.alternatives.iter().any(|a| a.id == rating.alternative_id) {
                continue;
            }

            contributions
                .entry(rating.alternative_id)
                .or_default()
                .push(ScoreContribution {
                    criterion_id: criterion.criterion_id,
                    criterion_name: criterion.name.clone(),
                    criterion_weight: criterion.weight,
                    local_value: rating.score,
                    contribution: criterion.weight * rating.score,
                });
        }

        Ok(data
            .alternatives
            .iter()
            .filter_map(|alternative| {
                let breakdown = contributions.remove(&alternative.id)?;
                let score: f64 = breakdown.iter().map(|b| b.contribution).sum();
                (score > 0.0).then(|| RankedAlternative {
                    alternative_id: alternative.id,
                    name: alternative.name.clone(),
                    score,
                    breakdown,
                })
            })
            .collect())
    }

    /// Score descending; equal scores fall back to alternative id ascending.
    fn rank(mut ranking: Vec<RankedAlternative>) -> Vec<RankedAlternative> {
        ranking.sort_by(|a, b| match b.score.total_cmp(&a.score) {
            Ordering::Equal => a.alternative_id.cmp(&b.alternative_id),
            other => other,
        });
        ranking
    }
}
