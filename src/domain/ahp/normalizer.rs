//! Column normalization of comparison matrices.

use super::ComparisonMatrix;

/// A comparison matrix rescaled so that every column sums to 1.
///
/// Only [`Normalizer::normalize`] produces one, which is what lets
/// [`super::PriorityVectorCalculator`] trust its input.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatrix {
    rows: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.dimension();
        (0..n)
            .map(|j| self.rows.iter().map(|row| row[j]).sum())
            .collect()
    }
}

/// Divides every entry by its column sum.
pub struct Normalizer;

impl Normalizer {
    /// Column sums are positive because the diagonal is 1 and every entry is
    /// positive, so no further validation happens here.
    pub fn normalize(matrix: &ComparisonMatrix) -> NormalizedMatrix {
        let column_sums = matrix.column_sums();

        let rows = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .collect()
            })
            .collect();

        NormalizedMatrix { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{MatrixBuilder, PairwiseJudgment};
    use crate::domain::foundation::CriterionId;
    use proptest::prelude::*;

    fn ids(n: i64) -> Vec<CriterionId> {
        (1..=n).map(CriterionId::new).collect()
    }

    #[test]
    fn textbook_matrix_columns_sum_to_one() {
        let matrix = MatrixBuilder::build(
            &ids(3),
            vec![
                PairwiseJudgment::new(CriterionId::new(1), CriterionId::new(2), 3.0),
                PairwiseJudgment::new(CriterionId::new(1), CriterionId::new(3), 5.0),
                PairwiseJudgment::new(CriterionId::new(2), CriterionId::new(3), 2.0),
            ],
        )
        .unwrap();

        let normalized = Normalizer::normalize(&matrix);

        for sum in normalized.column_sums() {
            assert!((sum - 1.0).abs() < 1e-9);
        }
        // 1 / 1.5333.. = 0.6522
        assert!((normalized.rows()[0][0] - 0.6522).abs() < 1e-4);
        // 3 / 4.5
        assert!((normalized.rows()[0][1] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn neutral_matrix_normalizes_to_uniform_entries() {
        let normalized = Normalizer::normalize(&ComparisonMatrix::identity(4));
        for row in normalized.rows() {
            for value in row {
                assert!((value - 0.25).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn empty_matrix_stays_empty() {
        let normalized = Normalizer::normalize(&ComparisonMatrix::identity(0));
        assert_eq!(normalized.dimension(), 0);
    }

    proptest! {
        #[test]
        fn every_column_sums_to_one(
            n in 1i64..9,
            raw in prop::collection::vec((1i64..9, 1i64..9, 1u32..=9, any::<bool>()), 0..40),
        ) {
            let judgments: Vec<_> = raw
                .into_iter()
                .map(|(a, b, v, invert)| {
                    let value = if invert { 1.0 / f64::from(v) } else { f64::from(v) };
                    PairwiseJudgment::new(CriterionId::new(a), CriterionId::new(b), value)
                })
                .collect();
            let matrix = MatrixBuilder::build(&ids(n), judgments).unwrap();

            for sum in Normalizer::normalize(&matrix).column_sums() {
                prop_assert!((sum - 1.0).abs() < 1e-9);
            }
        }
    }
}
