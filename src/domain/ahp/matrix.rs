//! Comparison matrix construction from sparse pairwise judgments.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{AhpError, PairwiseJudgment};

/// Square, reciprocal pairwise comparison matrix.
///
/// Invariants: `m[i][i] == 1` and `m[j][i] == 1 / m[i][j]`. Only
/// [`MatrixBuilder`] constructs one, so both always hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// n×n matrix of ones: every pair at "equal importance".
    pub fn identity(n: usize) -> Self {
        Self {
            rows: vec![vec![1.0; n]; n],
        }
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sum of each column, in column order.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.dimension();
        (0..n)
            .map(|j| self.rows.iter().map(|row| row[j]).sum())
            .collect()
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.rows[i][j] = value;
        self.rows[j][i] = 1.0 / value;
    }
}

/// Builds comparison matrices for either level of the hierarchy.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Builds the matrix for `entities` (row/column order) from `judgments`.
    ///
    /// # Rules
    /// - Pairs with no judgment stay at 1 ("equal importance"). This is a
    ///   deliberate default, not an error.
    /// - Later judgments for the same pair overwrite earlier ones, in
    ///   either orientation.
    /// - Judgments naming an entity outside `entities` are ignored, as are
    ///   self-comparisons.
    ///
    /// # Errors
    /// `InvalidJudgment` if any value is non-positive, not finite, or so
    /// small that its reciprocal overflows.
    pub fn build<Id, I>(entities: &[Id], judgments: I) -> Result<ComparisonMatrix, AhpError>
    where
        Id: PartialEq + Display,
        I: IntoIterator<Item = PairwiseJudgment<Id>>,
    {
        let mut matrix = ComparisonMatrix::identity(entities.len());

        for judgment in judgments {
            if !judgment.has_usable_value() {
                return Err(AhpError::invalid_judgment(
                    &judgment.subject_a,
                    &judgment.subject_b,
                    judgment.value,
                ));
            }

            let i = entities.iter().position(|e| *e == judgment.subject_a);
            let j = entities.iter().position(|e| *e == judgment.subject_b);

            match (i, j) {
                (Some(i), Some(j)) if i != j => matrix.set_pair(i, j, judgment.value),
                _ => continue,
            }
        }

        Ok(matrix)
    }
}
