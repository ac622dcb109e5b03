//! Error taxonomy for the ranking pipeline.

use std::fmt;
use thiserror::Error;

/// The user-supplied vector a dimension check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Weights,
    Impacts,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Weights => f.write_str("weights"),
            VectorKind::Impacts => f.write_str("impacts"),
        }
    }
}

/// Errors raised while validating input or computing a ranking.
///
/// Validation kinds are always raised before any derived matrix exists.
/// Degeneracy kinds are raised mid-pipeline. Either way no partial result
/// is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Criteria values must be numeric: row {row}, column '{column}' contains '{value}'")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Number of {vector} ({actual}) must match number of criteria ({expected})")]
    DimensionMismatch {
        vector: VectorKind,
        expected: usize,
        actual: usize,
    },

    #[error("Impacts must be either '+' or '-': position {position} contains '{token}'")]
    InvalidImpactToken { position: usize, token: String },

    #[error("Invalid weight at position {position} ('{token}'): {reason}")]
    InvalidWeight {
        position: usize,
        token: String,
        reason: String,
    },

    #[error("Criterion '{column}' has a zero sum of squares and cannot be normalized")]
    DegenerateColumn { column: String },

    #[error("Alternative at row {row} coincides with both ideal points; its score is undefined")]
    DegenerateScore { row: usize },

    #[error("Distances for the alternative at row {row} exceed the floating-point range")]
    NumericOverflow { row: usize },
}

impl TopsisError {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        TopsisError::Schema(message.into())
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            TopsisError::Schema(_) => "SCHEMA_ERROR",
            TopsisError::NonNumeric { .. } => "NON_NUMERIC",
            TopsisError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            TopsisError::InvalidImpactToken { .. } => "INVALID_IMPACT_TOKEN",
            TopsisError::InvalidWeight { .. } => "INVALID_WEIGHT",
            TopsisError::DegenerateColumn { .. } => "DEGENERATE_COLUMN",
            TopsisError::DegenerateScore { .. } => "DEGENERATE_SCORE",
            TopsisError::NumericOverflow { .. } => "NUMERIC_OVERFLOW",
        }
    }

    /// Returns true when the input was well-formed but the data itself
    /// makes the computation undefined.
    pub fn is_degeneracy(&self) -> bool {
        matches!(
            self,
            TopsisError::DegenerateColumn { .. }
                | TopsisError::DegenerateScore { .. }
                | TopsisError::NumericOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_the_vector() {
        let err = TopsisError::DimensionMismatch {
            vector: VectorKind::Weights,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Number of weights (2) must match number of criteria (3)"
        );
    }

    #[test]
    fn codes_are_distinct_per_kind() {
        let errors = [
            TopsisError::schema("x"),
            TopsisError::NonNumeric {
                row: 1,
                column: "c".into(),
                value: "v".into(),
            },
            TopsisError::DimensionMismatch {
                vector: VectorKind::Impacts,
                expected: 1,
                actual: 2,
            },
            TopsisError::InvalidImpactToken {
                position: 1,
                token: "x".into(),
            },
            TopsisError::InvalidWeight {
                position: 1,
                token: "x".into(),
                reason: "r".into(),
            },
            TopsisError::DegenerateColumn { column: "c".into() },
            TopsisError::DegenerateScore { row: 1 },
            TopsisError::NumericOverflow { row: 1 },
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn only_degenerate_kinds_are_degeneracy() {
        assert!(TopsisError::DegenerateScore { row: 1 }.is_degeneracy());
        assert!(TopsisError::DegenerateColumn { column: "c".into() }.is_degeneracy());
        assert!(TopsisError::NumericOverflow { row: 1 }.is_degeneracy());
        assert!(!TopsisError::schema("too few columns").is_degeneracy());
    }
}
