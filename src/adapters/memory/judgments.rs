//! In-memory judgment and rating storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::{AlternativeJudgment, CriteriaJudgment, DirectRating};
use crate::domain::foundation::{CriterionId, DomainError, UserId};
use crate::ports::{AlternativeJudgmentStore, CriteriaJudgmentStore, DirectRatingStore};

/// Per-user judgments for both levels plus direct ratings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJudgmentStore {
    criteria: Arc<RwLock<HashMap<UserId, Vec<CriteriaJudgment>>>>,
    alternatives: Arc<RwLock<HashMap<UserId, Vec<AlternativeJudgment>>>>,
    ratings: Arc<RwLock<HashMap<UserId, Vec<DirectRating>>>>,
}

impl InMemoryJudgmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.criteria.write().await.clear();
        self.alternatives.write().await.clear();
        self.ratings.write().await.clear();
    }
}

#[async_trait]
impl CriteriaJudgmentStore for InMemoryJudgmentStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<CriteriaJudgment>, DomainError> {
        Ok(self
            .criteria
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_for_user(
        &self,
        user_id: &UserId,
        judgments: &[CriteriaJudgment],
    ) -> Result<(), DomainError> {
        self.criteria
            .write()
            .await
            .insert(user_id.clone(), judgments.to_vec());
        Ok(())
    }
}

#[async_trait]
impl AlternativeJudgmentStore for InMemoryJudgmentStore {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AlternativeJudgment>, DomainError> {
        Ok(self
            .alternatives
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_for_criterion(
        &self,
        user_id: &UserId,
        criterion_id: CriterionId,
        judgments: &[AlternativeJudgment],
    ) -> Result<(), DomainError> {
        let mut alternatives = self.alternatives.write().await;
        let stored = alternatives.entry(user_id.clone()).or_default();
        stored.retain(|j| j.criterion_id != criterion_id);
        stored.extend(judgments.iter().map(|j| AlternativeJudgment {
            criterion_id,
            ..*j
        }));
        Ok(())
    }
}

#[async_trait]
impl DirectRatingStore for InMemoryJudgmentStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<DirectRating>, DomainError> {
        Ok(self
            .ratings
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_for_user(
        &self,
        user_id: &UserId,
        ratings: &[DirectRating],
    ) -> Result<(), DomainError> {
        self.ratings
            .write()
            .await
            .insert(user_id.clone(), ratings.to_vec());
        Ok(())
    }
}
