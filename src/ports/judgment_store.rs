//! Pairwise judgment ports, one per hierarchy level.
//!
//! Judgments are scoped to one user. Reads return them in submission
//! order, which is what makes "later duplicates win" deterministic.

use crate::domain::ahp::{AlternativeJudgment, CriteriaJudgment};
use crate::domain::foundation::{CriterionId, DomainError, UserId};
use async_trait::async_trait;

/// Criteria-level judgments.
#[async_trait]
pub trait CriteriaJudgmentStore: Send + Sync {
    /// The user's judgments in submission order.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<CriteriaJudgment>, DomainError>;

    /// Replace the user's whole set atomically.
    async fn replace_for_user(
        &self,
        user_id: &UserId,
        judgments: &[CriteriaJudgment],
    ) -> Result<(), DomainError>;
}

/// Alternative-level judgments, each tagged with a criterion.
#[async_trait]
pub trait AlternativeJudgmentStore: Send + Sync {
    /// The user's judgments for every criterion, in submission order.
    async fn find_by_user(&self, user_id: &UserId)
        -> Result<Vec<AlternativeJudgment>, DomainError>;

    /// Replace the user's judgments for one criterion atomically.
    ///
    /// Judgments for other criteria are left untouched.
    async fn replace_for_criterion(
        &self,
        user_id: &UserId,
        criterion_id: CriterionId,
        judgments: &[AlternativeJudgment],
    ) -> Result<(), DomainError>;
}
