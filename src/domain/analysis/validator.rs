//! Validator - Turns a raw table and delimited vectors into typed inputs.
//!
//! Rules are applied in a fixed order so that the first failure reported is
//! deterministic:
//!
//! 1. At least 3 columns (identifier + 2 criteria), every row full width,
//!    at least one row
//! 2. Every criteria cell parses as a finite number
//! 3. Weight count equals criteria count
//! 4. Impact count equals criteria count
//! 5. Every impact token is `+` or `-`
//! 6. Every weight parses as a finite, strictly positive number

use serde::{Deserialize, Serialize};

use super::dataset::RawTable;
use super::decision_matrix::{
    ensure_dimension, DecisionMatrix, Impact, ImpactVector, WeightVector, MIN_CRITERIA,
};
use super::errors::{TopsisError, VectorKind};

/// Separator for weight and impact strings.
pub const TOKEN_SEPARATOR: char = ',';

/// Knobs for token parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Strip surrounding whitespace from weight and impact tokens.
    ///
    /// Off by default: `"+, -"` is rejected unless this is enabled.
    #[serde(default)]
    pub trim_tokens: bool,
}

impl ValidationOptions {
    pub fn trimming() -> Self {
        Self { trim_tokens: true }
    }
}

/// Typed inputs ready for the ranking pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Input validation functions.
pub struct Validator;

impl Validator {
    /// Validates a raw table together with comma-delimited weights and impacts.
    pub fn validate(
        table: &RawTable,
        weights: &str,
        impacts: &str,
        options: ValidationOptions,
    ) -> Result<ValidatedInput, TopsisError> {
        let matrix = Self::parse_matrix(table)?;
        let criteria = matrix.criteria_count();

        let weight_tokens = Self::split_tokens(weights, options);
        ensure_dimension(VectorKind::Weights, criteria, weight_tokens.len())?;

        let impact_tokens = Self::split_tokens(impacts, options);
        ensure_dimension(VectorKind::Impacts, criteria, impact_tokens.len())?;

        let impacts = Self::parse_impacts(&impact_tokens)?;
        let weights = Self::parse_weights(&weight_tokens)?;

        Ok(ValidatedInput {
            matrix,
            weights,
            impacts,
        })
    }

    /// Extracts the criteria columns of a table as a numeric matrix.
    pub fn parse_matrix(table: &RawTable) -> Result<DecisionMatrix, TopsisError> {
        let columns = table.column_count();
        if columns < MIN_CRITERIA + 1 {
            return Err(TopsisError::schema(format!(
                "input must contain at least {} columns (identifier plus {} criteria), found {}",
                MIN_CRITERIA + 1,
                MIN_CRITERIA,
                columns
            )));
        }
        if table.rows.is_empty() {
            return Err(TopsisError::schema("input contains no alternatives"));
        }

        let criteria = table.criteria_headers().to_vec();
        let mut rows = Vec::with_capacity(table.row_count());

        for (index, raw_row) in table.rows.iter().enumerate() {
            if raw_row.len() != columns {
                return Err(TopsisError::schema(format!(
                    "row {} has {} cells, expected {}",
                    index + 1,
                    raw_row.len(),
                    columns
                )));
            }

            let values = raw_row[1..]
                .iter()
                .zip(&criteria)
                .map(|(cell, column)| {
                    Self::parse_cell(cell).ok_or_else(|| TopsisError::NonNumeric {
                        row: index + 1,
                        column: column.clone(),
                        value: cell.clone(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;

            rows.push(values);
        }

        DecisionMatrix::new(criteria, rows)
    }

    /// Parses raw impact tokens into tagged directions.
    pub fn parse_impacts(tokens: &[&str]) -> Result<ImpactVector, TopsisError> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                Impact::from_token(token).ok_or_else(|| TopsisError::InvalidImpactToken {
                    position: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ImpactVector::new)
    }

    /// Parses raw weight tokens. Range checks are left to [`WeightVector::new`];
    /// its errors are re-labelled with the token as the user wrote it.
    pub fn parse_weights(tokens: &[&str]) -> Result<WeightVector, TopsisError> {
        let weights = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<f64>().map_err(|_| TopsisError::InvalidWeight {
                    position: index + 1,
                    token: token.to_string(),
                    reason: "not a number".to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        WeightVector::new(weights).map_err(|e| match e {
            TopsisError::InvalidWeight {
                position, reason, ..
            } => TopsisError::InvalidWeight {
                position,
                token: tokens
                    .get(position - 1)
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
                reason,
            },
            other => other,
        })
    }

    fn split_tokens(raw: &str, options: ValidationOptions) -> Vec<&str> {
        raw.split(TOKEN_SEPARATOR)
            .map(|token| if options.trim_tokens { token.trim() } else { token })
            .collect()
    }

    /// Cells tolerate surrounding padding; anything non-finite is rejected.
    fn parse_cell(cell: &str) -> Option<f64> {
        cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}
