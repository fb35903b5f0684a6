//! Recommendation run persistence port.
//!
//! # Design
//!
//! - **Append-only**: runs are created, never updated or deleted
//! - **Storage-assigned identity**: the recorder generates id and timestamp
//! - **User-scoped reads**: history is always per user

use crate::domain::ahp::{NewRecommendationRun, RecommendationRun};
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait RunRecorder: Send + Sync {
    /// Persist a new run.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, run: NewRecommendationRun) -> Result<RecommendationRun, DomainError>;

    /// A user's runs, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<RecommendationRun>, DomainError>;
}
