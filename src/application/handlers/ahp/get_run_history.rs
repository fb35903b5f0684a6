//! GetRunHistoryHandler - Query handler for a user's past runs.

use std::sync::Arc;

use crate::domain::ahp::{AhpError, RecommendationRun};
use crate::domain::foundation::UserId;
use crate::ports::RunRecorder;

/// Query for a user's recommendation runs.
#[derive(Debug, Clone)]
pub struct GetRunHistoryQuery {
    pub user_id: UserId,
    /// Keep only the newest `limit` runs.
    pub limit: Option<usize>,
}

/// Handler for run history queries.
pub struct GetRunHistoryHandler {
    recorder: Arc<dyn RunRecorder>,
}

impl GetRunHistoryHandler {
    pub fn new(recorder: Arc<dyn RunRecorder>) -> Self {
        Self { recorder }
    }

    /// Runs newest first.
    pub async fn handle(&self, query: GetRunHistoryQuery) -> Result<Vec<RecommendationRun>, AhpError> {
        let mut runs = self.recorder.find_by_user(&query.user_id).await?;
        if let Some(limit) = query.limit {
            runs.truncate(limit);
        }
        Ok(runs)
    }
}
