//! PostgreSQL implementation of the judgment and rating ports.
//!
//! Reads are ordered by surrogate id so that submission order, and with it
//! "later duplicates win", survives the round trip. Replacements delete and
//! re-insert inside one transaction.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::ahp::{AlternativeJudgment, CriteriaJudgment, DirectRating, PairwiseJudgment};
use crate::domain::foundation::{AlternativeId, CriterionId, DomainError, UserId};
use crate::ports::{AlternativeJudgmentStore, CriteriaJudgmentStore, DirectRatingStore};

/// Backs `pairwise_comparisons`, `alternative_comparisons` and `user_preferences`.
#[derive(Clone)]
pub struct PostgresJudgmentStore {
    pool: PgPool,
}

impl PostgresJudgmentStore {
    /// Creates a new PostgresJudgmentStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CriteriaJudgmentStore for PostgresJudgmentStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<CriteriaJudgment>, DomainError> {
        let rows: Vec<(i64, i64, f64)> = sqlx::query_as(
            r#"
            SELECT criteria_id_1, criteria_id_2, value
            FROM pairwise_comparisons
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch criteria judgments: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|(a, b, value)| PairwiseJudgment::new(CriterionId::new(a), CriterionId::new(b), value))
            .collect())
    }

    async fn replace_for_user(
        &self,
        user_id: &UserId,
        judgments: &[CriteriaJudgment],
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to start transaction: {}", e))
        })?;

        sqlx::query("DELETE FROM pairwise_comparisons WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to delete criteria judgments: {}", e))
            })?;

        for judgment in judgments {
            sqlx::query(
                r#"
                INSERT INTO pairwise_comparisons (user_id, criteria_id_1, criteria_id_2, value)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user_id.as_str())
            .bind(judgment.subject_a.value())
            .bind(judgment.subject_b.value())
            .bind(judgment.value)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert criteria judgment: {}", e))
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl AlternativeJudgmentStore for PostgresJudgmentStore {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AlternativeJudgment>, DomainError> {
        let rows: Vec<(i64, i64, i64, f64)> = sqlx::query_as(
            r#"
            SELECT criteria_id, alternative_id_1, alternative_id_2, value
            FROM alternative_comparisons
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch alternative judgments: {}", e))
        })?;

        Ok(rows
            .into_iter()
            .map(|(criterion, a, b, value)| {
                AlternativeJudgment::new(
                    CriterionId::new(criterion),
                    AlternativeId::new(a),
                    AlternativeId::new(b),
                    value,
                )
            })
            .collect())
    }

    async fn replace_for_criterion(
        &self,
        user_id: &UserId,
        criterion_id: CriterionId,
        judgments: &[AlternativeJudgment],
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to start transaction: {}", e))
        })?;

        sqlx::query("DELETE FROM alternative_comparisons WHERE user_id = $1 AND criteria_id = $2")
            .bind(user_id.as_str())
            .bind(criterion_id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to delete alternative judgments: {}", e))
            })?;

        for judgment in judgments {
            sqlx::query(
                r#"
                INSERT INTO alternative_comparisons (
                    user_id, criteria_id, alternative_id_1, alternative_id_2, value
                ) VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(user_id.as_str())
            .bind(criterion_id.value())
            .bind(judgment.subject_a.value())
            .bind(judgment.subject_b.value())
            .bind(judgment.value)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert alternative judgment: {}", e))
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl DirectRatingStore for PostgresJudgmentStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<DirectRating>, DomainError> {
        let rows: Vec<(i64, i64, f64)> = sqlx::query_as(
            r#"
            SELECT alternative_id, criteria_id, score
            FROM user_preferences
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch ratings: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|(alternative, criterion, score)| {
                DirectRating::new(AlternativeId::new(alternative), CriterionId::new(criterion), score)
            })
            .collect())
    }

    async fn replace_for_user(
        &self,
        user_id: &UserId,
        ratings: &[DirectRating],
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to start transaction: {}", e))
        })?;

        sqlx::query("DELETE FROM user_preferences WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete ratings: {}", e)))?;

        for rating in ratings {
            sqlx::query(
                r#"
                INSERT INTO user_preferences (user_id, alternative_id, criteria_id, score)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user_id.as_str())
            .bind(rating.alternative_id.value())
            .bind(rating.criterion_id.value())
            .bind(rating.score)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert rating: {}", e)))?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }
}
