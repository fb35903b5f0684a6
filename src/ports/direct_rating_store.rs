//! Direct rating port.

use crate::domain::ahp::DirectRating;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Per-user direct ratings of alternatives under criteria.
#[async_trait]
pub trait DirectRatingStore: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<DirectRating>, DomainError>;

    /// Replace the user's whole set atomically.
    async fn replace_for_user(
        &self,
        user_id: &UserId,
        ratings: &[DirectRating],
    ) -> Result<(), DomainError>;
}
