//! Alternatives catalog port.

use crate::domain::ahp::Alternative;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Read access to the shared alternatives catalog.
#[async_trait]
pub trait AlternativeStore: Send + Sync {
    /// All alternatives, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Alternative>, DomainError>;
}
