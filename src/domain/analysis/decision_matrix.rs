//! Decision Matrix - Validated numeric inputs for TOPSIS ranking.

use serde::{Deserialize, Serialize};

use super::errors::{TopsisError, VectorKind};

/// Minimum number of criteria a ranking needs.
pub const MIN_CRITERIA: usize = 2;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher raw values are preferred (`+`).
    Benefit,
    /// Lower raw values are preferred (`-`).
    Cost,
}

impl Impact {
    /// Parses a raw impact token. Only `+` and `-` are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    /// Returns the raw token for this impact.
    pub fn as_token(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }
}

/// Alternatives x criteria matrix of finite values.
///
/// Identifier columns are not part of the matrix. Every row has the same
/// length, there are at least [`MIN_CRITERIA`] criteria and at least one
/// alternative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a matrix with named criteria.
    pub fn new(criteria: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        if criteria.len() < MIN_CRITERIA {
            return Err(TopsisError::schema(format!(
                "at least {} criteria columns are required, found {}",
                MIN_CRITERIA,
                criteria.len()
            )));
        }
        if rows.is_empty() {
            return Err(TopsisError::schema("at least one alternative is required"));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != criteria.len() {
                return Err(TopsisError::schema(format!(
                    "row {} has {} values, expected {}",
                    index + 1,
                    row.len(),
                    criteria.len()
                )));
            }
            if let Some(position) = row.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::NonNumeric {
                    row: index + 1,
                    column: criteria[position].clone(),
                    value: row[position].to_string(),
                });
            }
        }

        Ok(Self { criteria, rows })
    }

    /// Creates a matrix whose criteria are named `C1..Cn`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let criteria = (1..=width).map(|i| format!("C{}", i)).collect();
        Self::new(criteria, rows)
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the number of criteria (columns).
    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterates over the values of one criterion column.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows.iter().map(move |row| row[criterion])
    }
}

/// Strictly positive, finite weight per criterion.
///
/// Weights are absolute scaling factors and need not sum to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        for (index, weight) in weights.iter().enumerate() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(TopsisError::InvalidWeight {
                    position: index + 1,
                    token: weight.to_string(),
                    reason: "weights must be finite and greater than zero".to_string(),
                });
            }
        }
        Ok(Self(weights))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Preference direction per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks that a per-criterion vector matches the matrix width.
pub(crate) fn ensure_dimension(
    vector: VectorKind,
    expected: usize,
    actual: usize,
) -> Result<(), TopsisError> {
    if expected != actual {
        return Err(TopsisError::DimensionMismatch {
            vector,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_tokens_map_to_directions() {
        assert_eq!(Impact::from_token("+"), Some(Impact::Benefit));
        assert_eq!(Impact::from_token("-"), Some(Impact::Cost));
        assert_eq!(Impact::from_token("x"), None);
        assert_eq!(Impact::from_token(" +"), None);
        assert_eq!(Impact::Cost.as_token(), "-");
    }

    #[test]
    fn matrix_requires_two_criteria() {
        let result = DecisionMatrix::from_rows(vec![vec![1.0], vec![2.0]]);
        assert!(matches!(result, Err(TopsisError::Schema(_))));
    }

    #[test]
    fn matrix_requires_an_alternative() {
        let result = DecisionMatrix::new(vec!["a".into(), "b".into()], vec![]);
        assert!(matches!(result, Err(TopsisError::Schema(_))));
    }

    #[test]
    fn matrix_rejects_ragged_rows() {
        let result = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(TopsisError::Schema(_))));
    }

    #[test]
    fn matrix_rejects_non_finite_values() {
        let result = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![f64::NAN, 1.0]]);
        match result {
            Err(TopsisError::NonNumeric { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "C1");
            }
            other => panic!("expected NonNumeric, got {:?}", other),
        }
    }

    #[test]
    fn matrix_exposes_shape_and_columns() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.criteria_count(), 2);
        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![2.0, 4.0]);
        assert_eq!(matrix.criteria(), &["C1".to_string(), "C2".to_string()]);
    }

    #[test]
    fn weights_must_be_positive() {
        assert!(WeightVector::new(vec![1.0, 0.5]).is_ok());
        assert!(matches!(
            WeightVector::new(vec![1.0, 0.0]),
            Err(TopsisError::InvalidWeight { position: 2, .. })
        ));
        assert!(matches!(
            WeightVector::new(vec![-1.0, 1.0]),
            Err(TopsisError::InvalidWeight { position: 1, .. })
        ));
        assert!(WeightVector::new(vec![f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn ensure_dimension_reports_both_counts() {
        assert!(ensure_dimension(VectorKind::Impacts, 3, 3).is_ok());
        assert_eq!(
            ensure_dimension(VectorKind::Impacts, 3, 2),
            Err(TopsisError::DimensionMismatch {
                vector: VectorKind::Impacts,
                expected: 3,
                actual: 2,
            })
        );
    }
}
