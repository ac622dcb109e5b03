//! Ideal Solver - Data-relative ideal-best and ideal-worst profiles.

use serde::{Deserialize, Serialize};

use super::decision_matrix::{ensure_dimension, Impact, ImpactVector};
use super::errors::{TopsisError, VectorKind};
use super::weighter::WeightedMatrix;

/// Per-criterion extremes of the weighted matrix, direction-aware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoint {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Ideal point derivation.
pub struct IdealSolver;

impl IdealSolver {
    /// Derives the ideal-best and ideal-worst vectors.
    ///
    /// For a `Benefit` criterion best is the column maximum and worst the
    /// minimum; a `Cost` criterion swaps them. Columns are solved
    /// independently, so the ideal point is usually not an actual
    /// alternative.
    pub fn solve(
        weighted: &WeightedMatrix,
        impacts: &ImpactVector,
    ) -> Result<IdealPoint, TopsisError> {
        ensure_dimension(VectorKind::Impacts, weighted.criteria_count(), impacts.len())?;

        let (best, worst) = impacts
            .as_slice()
            .iter()
            .enumerate()
            .map(|(criterion, impact)| {
                let (min, max) = Self::column_extremes(weighted.column(criterion));
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();

        Ok(IdealPoint { best, worst })
    }

    fn column_extremes(values: impl Iterator<Item = f64>) -> (f64, f64) {
        values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
    }
}
