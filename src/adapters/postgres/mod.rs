//! PostgreSQL adapters - Database implementations of the storage ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresCatalog` - Criteria and alternatives
//! - `PostgresJudgmentStore` - Pairwise judgments (both levels) and direct ratings
//! - `PostgresRunRecorder` - Append-only recommendation runs

mod catalog;
mod judgment_store;
mod run_recorder;

pub use catalog::PostgresCatalog;
pub use judgment_store::PostgresJudgmentStore;
pub use run_recorder::PostgresRunRecorder;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool sized and timed by `config`, running the
/// embedded migrations first when `run_migrations` is set.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    info!(
        url = %config.redacted_url(),
        max_size = config.pool.max_size,
        "connecting to database"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.pool.min_idle)
        .max_connections(config.pool.max_size)
        .acquire_timeout(config.pool.acquire_timeout())
        .idle_timeout(config.pool.idle_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))?;
        info!("database migrations applied");
    }

    Ok(pool)
}
