//! In-memory criteria and alternatives catalog.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::{Alternative, Criterion};
use crate::domain::foundation::DomainError;
use crate::ports::{AlternativeStore, CriteriaStore};

/// Catalog of criteria and alternatives, kept sorted by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    criteria: Arc<RwLock<Vec<Criterion>>>,
    alternatives: Arc<RwLock<Vec<Alternative>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-seeded with the given entries.
    pub fn with_entries(criteria: Vec<Criterion>, alternatives: Vec<Alternative>) -> Self {
        let mut criteria = criteria;
        let mut alternatives = alternatives;
        criteria.sort_by_key(|c| c.id);
        alternatives.sort_by_key(|a| a.id);

        Self {
            criteria: Arc::new(RwLock::new(criteria)),
            alternatives: Arc::new(RwLock::new(alternatives)),
        }
    }

    /// Insert or rename a criterion.
    pub async fn upsert_criterion(&self, criterion: Criterion) {
        let mut criteria = self.criteria.write().await;
        match criteria.binary_search_by_key(&criterion.id, |c| c.id) {
            Ok(index) => criteria[index] = criterion,
            Err(index) => criteria.insert(index, criterion),
        }
    }

    /// Insert or rename an alternative.
    pub async fn upsert_alternative(&self, alternative: Alternative) {
        let mut alternatives = self.alternatives.write().await;
        match alternatives.binary_search_by_key(&alternative.id, |a| a.id) {
            Ok(index) => alternatives[index] = alternative,
            Err(index) => alternatives.insert(index, alternative),
        }
    }
}

#[async_trait]
impl CriteriaStore for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.criteria.read().await.clone())
    }
}

#[async_trait]
impl AlternativeStore for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.alternatives.read().await.clone())
    }
}
