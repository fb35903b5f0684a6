//! Creation time of a recommendation run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC instant assigned by a recorder when a run is stored. Serializes as
/// an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Rehydrates a stored `created_at` column.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}
