//! Weighter - Applies criterion weights to a normalized matrix.

use serde::Serialize;

use super::decision_matrix::{ensure_dimension, WeightVector};
use super::errors::{TopsisError, VectorKind};
use super::normalizer::NormalizedMatrix;

/// Normalized matrix scaled column-wise by the weight vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedMatrix {
    rows: Vec<Vec<f64>>,
}

impl WeightedMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn criteria_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows.iter().map(move |row| row[criterion])
    }
}

/// Weighting functions.
pub struct Weighter;

impl Weighter {
    /// Multiplies column `c` by `weights[c]`. No renormalization follows.
    pub fn apply(
        normalized: &NormalizedMatrix,
        weights: &WeightVector,
    ) -> Result<WeightedMatrix, TopsisError> {
        ensure_dimension(VectorKind::Weights, normalized.criteria_count(), weights.len())?;

        let rows = normalized
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(value, weight)| value * weight)
                    .collect()
            })
            .collect();

        Ok(WeightedMatrix { rows })
    }
}
