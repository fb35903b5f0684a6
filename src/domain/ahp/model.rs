//! Input data model: catalog entities, pairwise judgments and direct ratings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, CriterionId};

/// A decision criterion. Catalog order determines matrix row/column index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
}

impl Criterion {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CriterionId::new(id),
            name: name.into(),
        }
    }
}

/// A candidate being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
}

impl Alternative {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: AlternativeId::new(id),
            name: name.into(),
        }
    }
}

/// "subject_a is `value` times as important as subject_b".
///
/// `value` is conventionally on the Saaty scale `[1/9, 9]`; only
/// [`has_usable_value`](Self::has_usable_value) is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment<Id> {
    pub subject_a: Id,
    pub subject_b: Id,
    pub value: f64,
}

impl<Id> PairwiseJudgment<Id> {
    pub fn new(subject_a: Id, subject_b: Id, value: f64) -> Self {
        Self {
            subject_a,
            subject_b,
            value,
        }
    }

    /// Positive and finite, with a finite reciprocal for the mirrored cell.
    pub fn has_usable_value(&self) -> bool {
        self.value.is_finite() && self.value > 0.0 && (1.0 / self.value).is_finite()
    }
}

/// Criteria-level judgment, scoped to one user by the store.
pub type CriteriaJudgment = PairwiseJudgment<CriterionId>;

/// Alternative-level judgment, additionally scoped to one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeJudgment {
    pub criterion_id: CriterionId,
    pub subject_a: AlternativeId,
    pub subject_b: AlternativeId,
    pub value: f64,
}

impl AlternativeJudgment {
    pub fn new(
        criterion_id: CriterionId,
        subject_a: AlternativeId,
        subject_b: AlternativeId,
        value: f64,
    ) -> Self {
        Self {
            criterion_id,
            subject_a,
            subject_b,
            value,
        }
    }

    /// Drops the criterion scope, leaving the plain pairwise judgment.
    pub fn as_pairwise(&self) -> PairwiseJudgment<AlternativeId> {
        PairwiseJudgment::new(self.subject_a, self.subject_b, self.value)
    }
}

/// Raw suitability score of one alternative under one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectRating {
    pub alternative_id: AlternativeId,
    pub criterion_id: CriterionId,
    pub score: f64,
}

impl DirectRating {
    pub fn new(alternative_id: AlternativeId, criterion_id: CriterionId, score: f64) -> Self {
        Self {
            alternative_id,
            criterion_id,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_judgment_strips_criterion_scope() {
        let judgment = AlternativeJudgment::new(
            CriterionId::new(1),
            AlternativeId::new(10),
            AlternativeId::new(11),
            4.0,
        );
        let plain = judgment.as_pairwise();
        assert_eq!(plain.subject_a, AlternativeId::new(10));
        assert_eq!(plain.subject_b, AlternativeId::new(11));
        assert_eq!(plain.value, 4.0);
    }

    #[test]
    fn usable_value_needs_finite_reciprocal() {
        let judgment = |value| CriteriaJudgment::new(CriterionId::new(1), CriterionId::new(2), value);
        assert!(judgment(1.0 / 9.0).has_usable_value());
        assert!(judgment(9.0).has_usable_value());
        assert!(!judgment(0.0).has_usable_value());
        assert!(!judgment(-3.0).has_usable_value());
        assert!(!judgment(f64::INFINITY).has_usable_value());
        assert!(!judgment(1e-310).has_usable_value());
    }

    #[test]
    fn criteria_judgment_deserializes_from_flat_json() {
        let json = r#"{"subject_a": 1, "subject_b": 2, "value": 3.0}"#;
        let judgment: CriteriaJudgment = serde_json::from_str(json).unwrap();
        assert_eq!(judgment.subject_a, CriterionId::new(1));
        assert_eq!(judgment.value, 3.0);
    }
}
