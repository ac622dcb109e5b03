//! Distance Calculator - Euclidean separation from the ideal points.

use serde::{Deserialize, Serialize};

use super::ideal_solver::IdealPoint;
use super::weighter::WeightedMatrix;

/// Distance of every alternative to the ideal-best and ideal-worst vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distances {
    pub to_best: Vec<f64>,
    pub to_worst: Vec<f64>,
}

impl Distances {
    pub fn len(&self) -> usize {
        self.to_best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_best.is_empty()
    }
}

/// Distance functions.
pub struct DistanceCalculator;

impl DistanceCalculator {
    /// Computes both distance vectors, one entry per alternative.
    pub fn compute(weighted: &WeightedMatrix, ideal: &IdealPoint) -> Distances {
        let (to_best, to_worst) = weighted
            .rows()
            .iter()
            .map(|row| {
                (
                    Self::euclidean(row, &ideal.best),
                    Self::euclidean(row, &ideal.worst),
                )
            })
            .unzip();

        Distances { to_best, to_worst }
    }

    /// `sqrt(sum((a_i - b_i)^2))`, scaled by the largest difference so the
    /// squares cannot overflow. Never negative; infinite only when a single
    /// difference already is.
    pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
        let differences = a.iter().zip(b).map(|(x, y)| (x - y).abs());
        let scale = differences.clone().fold(0.0_f64, f64::max);
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let sum_of_squares: f64 = differences.map(|d| (d / scale).powi(2)).sum();
        scale * sum_of_squares.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{
        DecisionMatrix, IdealSolver, Impact, ImpactVector, Normalizer, WeightVector, Weighter,
    };

    #[test]
    fn euclidean_of_3_4_triangle() {
        assert!((DistanceCalculator::euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_to_self_is_zero() {
        assert_eq!(DistanceCalculator::euclidean(&[1.5, -2.0], &[1.5, -2.0]), 0.0);
    }

    #[test]
    fn euclidean_survives_huge_differences() {
        let distance = DistanceCalculator::euclidean(&[3e200, 4e200], &[0.0, 0.0]);
        assert!(distance.is_finite());
        assert!((distance / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn best_and_worst_alternatives_sit_on_the_ideals() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
        let weights = WeightVector::new(vec![1.0, 1.0]).unwrap();
        let weighted = Weighter::apply(&Normalizer::normalize(&matrix).unwrap(), &weights).unwrap();
        let ideal =
            IdealSolver::solve(&weighted, &ImpactVector::new(vec![Impact::Benefit; 2])).unwrap();

        let distances = DistanceCalculator::compute(&weighted, &ideal);

        assert_eq!(distances.len(), 2);
        assert_eq!(distances.to_worst[0], 0.0);
        assert_eq!(distances.to_best[1], 0.0);
        assert!(distances.to_best[0] > 0.0);
        assert!((distances.to_best[0] - distances.to_worst[1]).abs() < 1e-12);
    }
}
