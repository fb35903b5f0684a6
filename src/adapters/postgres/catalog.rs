//! PostgreSQL implementation of the catalog ports.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::ahp::{Alternative, Criterion};
use crate::domain::foundation::{AlternativeId, CriterionId, DomainError};
use crate::ports::{AlternativeStore, CriteriaStore};

/// Reads the `criteria` and `alternatives` tables.
#[derive(Clone)]
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    /// Creates a new PostgresCatalog.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CriteriaStore for PostgresCatalog {
    async fn list_all(&self) -> Result<Vec<Criterion>, DomainError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM criteria ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to list criteria: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Criterion {
                id: CriterionId::new(id),
                name,
            })
            .collect())
    }
}

#[async_trait]
impl AlternativeStore for PostgresCatalog {
    async fn list_all(&self) -> Result<Vec<Alternative>, DomainError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM alternatives ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to list alternatives: {}", e))
                })?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Alternative {
                id: AlternativeId::new(id),
                name,
            })
            .collect())
    }
}
