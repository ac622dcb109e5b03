//! Tabular input and output of a ranking run.

use serde::{Deserialize, Serialize};

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// A table as read by an ingestion collaborator.
///
/// The first column identifies the alternative and is carried through
/// untouched. Cells are kept as raw text so that the output can echo
/// them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<impl Into<String>>, rows: Vec<Vec<impl Into<String>>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns the total number of columns, identifier included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Headers of the criteria columns (everything after the identifier).
    pub fn criteria_headers(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }
}

/// One output row: the original cells plus score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub cells: Vec<String>,
    pub score: f64,
    pub rank: u32,
}

/// The augmented table handed back to collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Original headers, without the appended columns.
    pub headers: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Headers including the appended score and rank columns.
    pub fn output_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        headers.push(SCORE_COLUMN.to_string());
        headers.push(RANK_COLUMN.to_string());
        headers
    }

    /// Returns the identifier of the rank-1 alternative(s).
    pub fn leaders(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.rank == 1)
            .filter_map(|row| row.cells.first().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
