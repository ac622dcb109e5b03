//! Normalizer - Vector (Euclidean) normalization of criterion columns.

use serde::Serialize;

use super::decision_matrix::DecisionMatrix;
use super::errors::TopsisError;

/// A decision matrix whose columns each have unit Euclidean norm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatrix {
    rows: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn criteria_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows.iter().map(move |row| row[criterion])
    }
}

/// Column normalization functions.
pub struct Normalizer;

impl Normalizer {
    /// Divides every entry by the Euclidean norm of its column.
    ///
    /// # Errors
    ///
    /// `DegenerateColumn` when a column is all zeros.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<NormalizedMatrix, TopsisError> {
        let norms = (0..matrix.criteria_count())
            .map(|criterion| {
                let norm = Self::column_norm(matrix.column(criterion));
                if norm == 0.0 {
                    Err(TopsisError::DegenerateColumn {
                        column: matrix.criteria()[criterion].clone(),
                    })
                } else {
                    Ok(norm)
                }
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let rows = matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&norms).map(|(value, norm)| value / norm).collect())
            .collect();

        Ok(NormalizedMatrix { rows })
    }

    /// `sqrt(sum(x^2))`, scaled by the largest magnitude so that large
    /// values do not overflow to infinity.
    pub fn column_norm(values: impl Iterator<Item = f64> + Clone) -> f64 {
        let scale = values.clone().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if scale == 0.0 {
            return 0.0;
        }
        let sum_of_squares: f64 = values.map(|v| (v / scale).powi(2)).sum();
        scale * sum_of_squares.sqrt()
    }
}
