//! GetUserJudgmentsHandler - Query handler for everything a user has entered.
//!
//! Lets a caller redisplay the stored comparisons and ratings before
//! editing or recalculating.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::ahp::{AhpError, AlternativeJudgment, CriteriaJudgment, DirectRating};
use crate::domain::foundation::{CriterionId, UserId};
use crate::ports::{AlternativeJudgmentStore, CriteriaJudgmentStore, DirectRatingStore};

/// Query for a user's stored inputs.
#[derive(Debug, Clone)]
pub struct GetUserJudgmentsQuery {
    pub user_id: UserId,
    /// Restrict alternative judgments to one criterion.
    pub criterion_id: Option<CriterionId>,
}

/// Stored inputs, each list in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserJudgments {
    pub criteria: Vec<CriteriaJudgment>,
    pub alternatives: Vec<AlternativeJudgment>,
    pub ratings: Vec<DirectRating>,
}

impl UserJudgments {
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty() && self.alternatives.is_empty() && self.ratings.is_empty()
    }
}

/// Handler for stored-input queries.
pub struct GetUserJudgmentsHandler {
    criteria_judgments: Arc<dyn CriteriaJudgmentStore>,
    alternative_judgments: Arc<dyn AlternativeJudgmentStore>,
    ratings: Arc<dyn DirectRatingStore>,
}

impl GetUserJudgmentsHandler {
    pub fn new(
        criteria_judgments: Arc<dyn CriteriaJudgmentStore>,
        alternative_judgments: Arc<dyn AlternativeJudgmentStore>,
        ratings: Arc<dyn DirectRatingStore>,
    ) -> Self {
        Self {
            criteria_judgments,
            alternative_judgments,
            ratings,
        }
    }

    pub async fn handle(&self, query: GetUserJudgmentsQuery) -> Result<UserJudgments, AhpError> {
        let user_id = &query.user_id;
        let (criteria, mut alternatives, ratings) = tokio::try_join!(
            self.criteria_judgments.find_by_user(user_id),
            self.alternative_judgments.find_by_user(user_id),
            self.ratings.find_by_user(user_id),
        )?;

        if let Some(criterion_id) = query.criterion_id {
            alternatives.retain(|j| j.criterion_id == criterion_id);
        }

        Ok(UserJudgments {
            criteria,
            alternatives,
            ratings,
        })
    }
}
