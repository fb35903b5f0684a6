//! Handlers that replace a user's pairwise judgments.
//!
//! Values are checked before anything is written, so a rejected submission
//! leaves the previous set untouched.

use std::sync::Arc;

use tracing::info;

use crate::domain::ahp::{AhpError, AlternativeJudgment, CriteriaJudgment, PairwiseJudgment};
use crate::domain::foundation::{AlternativeId, CriterionId, UserId};
use crate::ports::{AlternativeJudgmentStore, CriteriaJudgmentStore, CriteriaStore};

/// Command to replace all of a user's criteria-level judgments.
#[derive(Debug, Clone)]
pub struct SubmitCriteriaJudgmentsCommand {
    pub user_id: UserId,
    pub judgments: Vec<CriteriaJudgment>,
}

/// Command to replace a user's alternative-level judgments under one criterion.
#[derive(Debug, Clone)]
pub struct SubmitAlternativeJudgmentsCommand {
    pub user_id: UserId,
    pub criterion_id: CriterionId,
    pub judgments: Vec<PairwiseJudgment<AlternativeId>>,
}

/// Number of judgments now stored for the replaced scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitJudgmentsResult {
    pub stored: usize,
}

fn check_values<Id: ToString>(judgments: &[PairwiseJudgment<Id>]) -> Result<(), AhpError> {
    match judgments.iter().find(|j| !j.has_usable_value()) {
        Some(j) => Err(AhpError::invalid_judgment(
            j.subject_a.to_string(),
            j.subject_b.to_string(),
            j.value,
        )),
        None => Ok(()),
    }
}

/// Handler for criteria-level submissions.
pub struct SubmitCriteriaJudgmentsHandler {
    store: Arc<dyn CriteriaJudgmentStore>,
}

impl SubmitCriteriaJudgmentsHandler {
    pub fn new(store: Arc<dyn CriteriaJudgmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitCriteriaJudgmentsCommand,
    ) -> Result<SubmitJudgmentsResult, AhpError> {
        check_values(&cmd.judgments)?;

        self.store
            .replace_for_user(&cmd.user_id, &cmd.judgments)
            .await?;

        info!(
            user_id = %cmd.user_id,
            count = cmd.judgments.len(),
            "criteria judgments replaced"
        );

        Ok(SubmitJudgmentsResult {
            stored: cmd.judgments.len(),
        })
    }
}

/// Handler for alternative-level submissions.
pub struct SubmitAlternativeJudgmentsHandler {
    criteria: Arc<dyn CriteriaStore>,
    store: Arc<dyn AlternativeJudgmentStore>,
}

impl SubmitAlternativeJudgmentsHandler {
    pub fn new(criteria: Arc<dyn CriteriaStore>, store: Arc<dyn AlternativeJudgmentStore>) -> Self {
        Self { criteria, store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAlternativeJudgmentsCommand,
    ) -> Result<SubmitJudgmentsResult, AhpError> {
        // 1. Criterion must exist
        let known = self
            .criteria
            .list_all()
            .await?
            .iter()
            .any(|c| c.id == cmd.criterion_id);
        if !known {
            return Err(AhpError::UnknownCriterion(cmd.criterion_id));
        }

        // 2. Values must be usable matrix entries
        check_values(&cmd.judgments)?;

        // 3. Replace
        let judgments: Vec<AlternativeJudgment> = cmd
            .judgments
            .iter()
            .map(|j| AlternativeJudgment::new(cmd.criterion_id, j.subject_a, j.subject_b, j.value))
            .collect();

        self.store
            .replace_for_criterion(&cmd.user_id, cmd.criterion_id, &judgments)
            .await?;

        info!(
            user_id = %cmd.user_id,
            criterion_id = %cmd.criterion_id,
            count = judgments.len(),
            "alternative judgments replaced"
        );

        Ok(SubmitJudgmentsResult {
            stored: judgments.len(),
        })
    }
}
