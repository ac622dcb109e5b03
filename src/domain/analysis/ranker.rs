//! Ranker - Relative-closeness scores and dense ranks.

use super::distance_calculator::Distances;
use super::errors::TopsisError;

/// Scoring and ranking functions.
pub struct Ranker;

impl Ranker {
    /// Computes `to_worst / (to_best + to_worst)` per alternative.
    ///
    /// # Errors
    ///
    /// `DegenerateScore` for the first alternative whose combined distance
    /// is zero. That only happens when every alternative is identical on
    /// every criterion (a single alternative included).
    ///
    /// `NumericOverflow` for the first alternative whose combined distance
    /// is not a finite number.
    pub fn score(distances: &Distances) -> Result<Vec<f64>, TopsisError> {
        distances
            .to_best
            .iter()
            .zip(&distances.to_worst)
            .enumerate()
            .map(|(index, (best, worst))| {
                let total = best + worst;
                if !total.is_finite() {
                    Err(TopsisError::NumericOverflow { row: index + 1 })
                } else if total == 0.0 {
                    Err(TopsisError::DegenerateScore { row: index + 1 })
                } else {
                    Ok(worst / total)
                }
            })
            .collect()
    }

    /// Assigns dense ranks by descending score.
    ///
    /// Rank 1 goes to the highest score. Equal scores share a rank and the
    /// next lower score gets the next integer, so ranks are `1..=k` for `k`
    /// distinct scores. Ranks are returned in input order.
    pub fn dense_rank(scores: &[f64]) -> Vec<u32> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut ranks = vec![0; scores.len()];
        let mut current = 0;
        let mut previous: Option<f64> = None;

        for index in order {
            let score = scores[index];
            if previous != Some(score) {
                current += 1;
                previous = Some(score);
            }
            ranks[index] = current;
        }

        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances(to_best: Vec<f64>, to_worst: Vec<f64>) -> Distances {
        Distances { to_best, to_worst }
    }

    #[test]
    fn score_is_relative_closeness() {
        let scores = Ranker::score(&distances(vec![1.0, 3.0, 0.0], vec![3.0, 1.0, 2.0])).unwrap();
        assert_eq!(scores, vec![0.75, 0.25, 1.0]);
    }

    #[test]
    fn zero_combined_distance_is_degenerate() {
        let result = Ranker::score(&distances(vec![0.5, 0.0], vec![0.5, 0.0]));
        assert_eq!(result, Err(TopsisError::DegenerateScore { row: 2 }));
    }

    #[test]
    fn infinite_distance_is_overflow() {
        let result = Ranker::score(&distances(vec![1.0, f64::INFINITY], vec![1.0, 1.0]));
        assert_eq!(result, Err(TopsisError::NumericOverflow { row: 2 }));

        let result = Ranker::score(&distances(vec![f64::MAX], vec![f64::MAX]));
        assert_eq!(result, Err(TopsisError::NumericOverflow { row: 1 }));
    }

    #[test]
    fn dense_rank_orders_descending() {
        assert_eq!(Ranker::dense_rank(&[0.2, 0.9, 0.5]), vec![3, 1, 2]);
    }

    #[test]
    fn ties_share_a_rank_without_gaps() {
        assert_eq!(
            Ranker::dense_rank(&[0.5, 0.9, 0.5, 0.1, 0.9]),
            vec![2, 1, 2, 3, 1]
        );
    }

    #[test]
    fn all_equal_scores_rank_first() {
        assert_eq!(Ranker::dense_rank(&[0.3, 0.3, 0.3]), vec![1, 1, 1]);
    }

    #[test]
    fn empty_scores_rank_empty() {
        assert!(Ranker::dense_rank(&[]).is_empty());
    }
}
