//! Criteria catalog port.

use crate::domain::ahp::Criterion;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Read access to the shared criteria catalog.
#[async_trait]
pub trait CriteriaStore: Send + Sync {
    /// All criteria, ordered by id ascending.
    ///
    /// The order fixes each criterion's row/column in the criteria matrix.
    async fn list_all(&self) -> Result<Vec<Criterion>, DomainError>;
}
