//! Priority (weight) derivation from a normalized matrix.

use serde::{Deserialize, Serialize};

use super::NormalizedMatrix;

/// One non-negative weight per matrix row; the weights sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Approximate principal-eigenvector method: the mean of each row of the
/// column-normalized matrix.
pub struct PriorityVectorCalculator;

impl PriorityVectorCalculator {
    /// Row means of `normalized`. A column-stochastic input makes the
    /// result sum to 1.
    pub fn calculate(normalized: &NormalizedMatrix) -> PriorityVector {
        let weights = normalized
            .rows()
            .iter()
            .map(|row| row.iter().sum::<f64>() / row.len() as f64)
            .collect();

        PriorityVector(weights)
    }
}
