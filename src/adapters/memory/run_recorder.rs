//! In-memory run recorder.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::{NewRecommendationRun, RecommendationRun};
use crate::domain::foundation::{DomainError, RunId, Timestamp, UserId};
use crate::ports::RunRecorder;

/// Append-only list of runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRunRecorder {
    runs: Arc<RwLock<Vec<RecommendationRun>>>,
}

impl InMemoryRunRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored runs
    pub async fn run_count(&self) -> usize {
        self.runs.read().await.len()
    }
}

#[async_trait]
impl RunRecorder for InMemoryRunRecorder {
    async fn create(&self, run: NewRecommendationRun) -> Result<RecommendationRun, DomainError> {
        let recorded = RecommendationRun::record(run, RunId::new(), Timestamp::now());
        self.runs.write().await.push(recorded.clone());
        Ok(recorded)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<RecommendationRun>, DomainError> {
        // Appended in creation order, so reversing gives newest first.
        Ok(self
            .runs
            .read()
            .await
            .iter()
            .rev()
            .filter(|run| run.user_id() == user_id)
            .cloned()
            .collect())
    }
}
