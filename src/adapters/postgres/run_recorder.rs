//! PostgreSQL implementation of RunRecorder.
//!
//! Runs are stored as JSONB snapshots and are insert-only.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::ahp::{
    AlternativeWeights, ConsistencyMetrics, CriterionWeight, NewRecommendationRun,
    RankedAlternative, RecommendationRun, ScoringStrategy,
};
use crate::domain::foundation::{DomainError, RunId, Timestamp, UserId};
use crate::ports::RunRecorder;

/// PostgreSQL implementation of RunRecorder.
#[derive(Clone)]
pub struct PostgresRunRecorder {
    pool: PgPool,
}

impl PostgresRunRecorder {
    /// Creates a new PostgresRunRecorder.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunRecorder for PostgresRunRecorder {
    async fn create(&self, run: NewRecommendationRun) -> Result<RecommendationRun, DomainError> {
        let recorded = RecommendationRun::record(run, RunId::new(), Timestamp::now());

        sqlx::query(
            r#"
            INSERT INTO recommendation_runs (
                id, user_id, strategy, criteria_weights, criteria_consistency,
                alternative_weights, final_ranking, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(recorded.id().as_uuid())
        .bind(recorded.user_id().as_str())
        .bind(recorded.strategy().as_str())
        .bind(Json(recorded.criteria_weights()))
        .bind(Json(recorded.criteria_consistency()))
        .bind(recorded.alternative_weights().map(Json))
        .bind(Json(recorded.final_ranking()))
        .bind(recorded.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert run: {}", e)))?;

        Ok(recorded)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<RecommendationRun>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, strategy, criteria_weights, criteria_consistency,
                   alternative_weights, final_ranking, created_at
            FROM recommendation_runs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch runs by user: {}", e)))?;

        rows.into_iter().map(row_to_run).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

fn row_to_run(row: PgRow) -> Result<RecommendationRun, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let strategy: String = column(&row, "strategy")?;
    let Json(criteria_weights): Json<Vec<CriterionWeight>> = column(&row, "criteria_weights")?;
    let Json(criteria_consistency): Json<ConsistencyMetrics> =
        column(&row, "criteria_consistency")?;
    let alternative_weights: Option<Json<Vec<AlternativeWeights>>> =
        column(&row, "alternative_weights")?;
    let Json(final_ranking): Json<Vec<RankedAlternative>> = column(&row, "final_ranking")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    let strategy = ScoringStrategy::parse(&strategy)
        .ok_or_else(|| DomainError::database(format!("Invalid strategy: {}", strategy)))?;
    let user_id = UserId::new(user_id)
        .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?;

    Ok(RecommendationRun::record(
        NewRecommendationRun {
            user_id,
            strategy,
            criteria_weights,
            criteria_consistency,
            alternative_weights: alternative_weights.map(|Json(levels)| levels),
            final_ranking,
        },
        RunId::from_uuid(id),
        Timestamp::from_datetime(created_at),
    ))
}
