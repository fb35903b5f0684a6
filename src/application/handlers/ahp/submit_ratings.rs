//! SubmitDirectRatingsHandler - Command handler that replaces a user's ratings.

use std::sync::Arc;

use tracing::info;

use crate::domain::ahp::{AhpError, DirectRating};
use crate::domain::foundation::UserId;
use crate::ports::DirectRatingStore;

/// Command to replace all of a user's direct ratings.
#[derive(Debug, Clone)]
pub struct SubmitDirectRatingsCommand {
    pub user_id: UserId,
    pub ratings: Vec<DirectRating>,
}

/// Handler for rating submissions.
pub struct SubmitDirectRatingsHandler {
    store: Arc<dyn DirectRatingStore>,
}

impl SubmitDirectRatingsHandler {
    pub fn new(store: Arc<dyn DirectRatingStore>) -> Self {
        Self { store }
    }

    /// Returns the number of ratings stored.
    pub async fn handle(&self, cmd: SubmitDirectRatingsCommand) -> Result<usize, AhpError> {
        if let Some(bad) = cmd.ratings.iter().find(|r| !r.score.is_finite()) {
            return Err(AhpError::InvalidRating {
                alternative: bad.alternative_id.to_string(),
                criterion: bad.criterion_id.to_string(),
                score: bad.score,
            });
        }

        self.store.replace_for_user(&cmd.user_id, &cmd.ratings).await?;

        info!(user_id = %cmd.user_id, count = cmd.ratings.len(), "direct ratings replaced");

        Ok(cmd.ratings.len())
    }
}
