//! Consistency measurement: λmax, CI and CR.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, PriorityVector};

/// Conventional AHP acceptability threshold for CR.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty random consistency indices for n = 1..=9.
pub const SAATY_RANDOM_INDEX: [f64; 9] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45];

/// RI used for any dimension past the end of the table.
pub const DEFAULT_RANDOM_INDEX_FALLBACK: f64 = 1.45;

/// Random consistency index lookup by matrix dimension.
///
/// `values[k]` is the RI for dimension `k + 1`. Dimensions past the end of
/// the table use `fallback`, which is an approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomIndexTable {
    values: Vec<f64>,
    fallback: f64,
}

impl RandomIndexTable {
    pub fn new(values: Vec<f64>, fallback: f64) -> Self {
        Self { values, fallback }
    }

    pub fn lookup(&self, n: usize) -> f64 {
        match n {
            0 => 0.0,
            n => self.values.get(n - 1).copied().unwrap_or(self.fallback),
        }
    }
}

impl Default for RandomIndexTable {
    fn default() -> Self {
        Self::new(SAATY_RANDOM_INDEX.to_vec(), DEFAULT_RANDOM_INDEX_FALLBACK)
    }
}

/// Tunables for [`ConsistencyChecker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    /// Largest CR still considered consistent (inclusive).
    pub threshold: f64,
    pub random_index: RandomIndexTable,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            random_index: RandomIndexTable::default(),
        }
    }
}

/// Consistency of one comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyMetrics {
    pub lambda_max: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "CR")]
    pub cr: f64,
    pub is_consistent: bool,
}

impl ConsistencyMetrics {
    /// Metrics of a matrix too small to be inconsistent.
    pub fn trivial(n: usize) -> Self {
        Self {
            lambda_max: n as f64,
            ci: 0.0,
            cr: 0.0,
            is_consistent: true,
        }
    }
}

/// Annotates a matrix with its consistency. Never blocks computation.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyChecker {
    config: ConsistencyConfig,
}

impl ConsistencyChecker {
    pub fn new(config: ConsistencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsistencyConfig {
        &self.config
    }

    /// Computes λmax, CI and CR for `matrix` given its derived `weights`.
    ///
    /// # Algorithm
    /// - `ws[i] = Σ_j m[i][j] * w[j]`
    /// - `λmax = mean(ws[i] / w[i])`
    /// - `CI = (λmax - n) / (n - 1)`, `CR = CI / RI(n)`
    ///
    /// For n ≤ 2 CI and CR are 0: a reciprocal matrix that small cannot
    /// be inconsistent.
    pub fn check(&self, matrix: &ComparisonMatrix, weights: &PriorityVector) -> ConsistencyMetrics {
        let n = matrix.dimension();
        debug_assert_eq!(n, weights.len());

        if n == 0 {
            return ConsistencyMetrics::trivial(0);
        }

        let w = weights.as_slice();
        let lambda_max = matrix
            .rows()
            .iter()
            .zip(w)
            .map(|(row, wi)| {
                let weighted_sum: f64 = row.iter().zip(w).map(|(m, wj)| m * wj).sum();
                weighted_sum / wi
            })
            .sum::<f64>()
            / n as f64;

        if n <= 2 {
            return ConsistencyMetrics {
                lambda_max,
                ..ConsistencyMetrics::trivial(n)
            };
        }

        let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
        let ri = self.config.random_index.lookup(n);
        let cr = if ri == 0.0 { 0.0 } else { ci / ri };

        tracing::trace!(n, lambda_max, ci, cr, "consistency computed");

        ConsistencyMetrics {
            lambda_max,
            ci,
            cr,
            is_consistent: cr <= self.config.threshold,
        }
    }
}
