//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{
    ConsistencyConfig, RandomIndexTable, DEFAULT_CONSISTENCY_THRESHOLD,
    DEFAULT_RANDOM_INDEX_FALLBACK, SAATY_RANDOM_INDEX,
};

/// AHP engine configuration
///
/// `AHP_RECOMMENDER__AHP__RANDOM_INDEX` takes a comma-separated list whose
/// k-th entry is the random index for dimension k + 1.
#[derive(Debug, Clone, Deserialize)]
pub struct AhpConfig {
    /// Largest consistency ratio still treated as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Random consistency indices by dimension
    #[serde(default = "default_random_index")]
    pub random_index: Vec<f64>,

    /// Random index used past the end of `random_index`
    #[serde(default = "default_random_index_fallback")]
    pub random_index_fallback: f64,
}

impl AhpConfig {
    /// Engine-side consistency settings.
    pub fn consistency_config(&self) -> ConsistencyConfig {
        ConsistencyConfig {
            threshold: self.consistency_threshold,
            random_index: RandomIndexTable::new(
                self.random_index.clone(),
                self.random_index_fallback,
            ),
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(
                self.consistency_threshold,
            ));
        }
        let valid_entry = |v: &f64| v.is_finite() && *v >= 0.0;
        if !self.random_index.iter().all(valid_entry) || !valid_entry(&self.random_index_fallback)
        {
            return Err(ValidationError::InvalidRandomIndex);
        }
        Ok(())
    }
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            random_index: default_random_index(),
            random_index_fallback: default_random_index_fallback(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_random_index() -> Vec<f64> {
    SAATY_RANDOM_INDEX.to_vec()
}

fn default_random_index_fallback() -> f64 {
    DEFAULT_RANDOM_INDEX_FALLBACK
}
