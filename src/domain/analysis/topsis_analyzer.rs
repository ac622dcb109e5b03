//! TOPSIS Analyzer - The end-to-end ranking pipeline.
//!
//! Stages run strictly forward:
//! validate → normalize → weight → ideal points → distances → score/rank.
//! Any error aborts the run; nothing partial is returned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dataset::{RawTable, ResultRow, ResultTable};
use super::decision_matrix::{DecisionMatrix, ImpactVector, WeightVector};
use super::distance_calculator::DistanceCalculator;
use super::errors::TopsisError;
use super::ideal_solver::IdealSolver;
use super::normalizer::Normalizer;
use super::ranker::Ranker;
use super::validator::{ValidationOptions, Validator};
use super::weighter::Weighter;

/// Score and dense rank per alternative, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub ranks: Vec<u32>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Stateless TOPSIS ranking.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Ranks already-validated inputs.
    pub fn rank(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Ranking, TopsisError> {
        let normalized = Normalizer::normalize(matrix)?;
        let weighted = Weighter::apply(&normalized, weights)?;
        let ideal = IdealSolver::solve(&weighted, impacts)?;
        debug!(best = ?ideal.best, worst = ?ideal.worst, "Derived ideal points");

        let distances = DistanceCalculator::compute(&weighted, &ideal);
        let scores = Ranker::score(&distances)?;
        let ranks = Ranker::dense_rank(&scores);

        Ok(Ranking { scores, ranks })
    }

    /// Validates a raw table plus delimited weights and impacts, ranks it,
    /// and returns the augmented table.
    pub fn evaluate(
        table: &RawTable,
        weights: &str,
        impacts: &str,
        options: ValidationOptions,
    ) -> Result<ResultTable, TopsisError> {
        let input = Validator::validate(table, weights, impacts, options)?;
        debug!(
            alternatives = input.matrix.alternative_count(),
            criteria = input.matrix.criteria_count(),
            "Validated decision matrix"
        );

        let ranking = Self::rank(&input.matrix, &input.weights, &input.impacts)?;

        let rows = table
            .rows
            .iter()
            .zip(ranking.scores.iter().zip(&ranking.ranks))
            .map(|(cells, (score, rank))| ResultRow {
                cells: cells.clone(),
                score: *score,
                rank: *rank,
            })
            .collect();

        Ok(ResultTable {
            headers: table.headers.clone(),
            rows,
        })
    }
}
