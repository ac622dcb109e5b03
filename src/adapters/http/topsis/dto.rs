//! HTTP DTOs for ranking endpoints.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::adapters::dataset::DatasetError;
use crate::application::handlers::{DatasetUpload, RunTopsisCommand, RunTopsisResult};
use crate::domain::analysis::ResultRow;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to rank a dataset.
///
/// Exactly one of `dataset_csv` and `dataset_excel_base64` must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct RunTopsisRequest {
    /// CSV text: header row, identifier column, then criteria columns.
    #[serde(default)]
    pub dataset_csv: Option<String>,
    /// Base64-encoded `.xlsx`/`.xls` workbook; the first worksheet is read.
    #[serde(default)]
    pub dataset_excel_base64: Option<String>,
    /// Comma-delimited weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-delimited impacts, e.g. `"+,-,+"`.
    pub impacts: String,
    /// Optional recipient for the result file.
    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<RunTopsisRequest> for RunTopsisCommand {
    type Error = DatasetError;

    fn try_from(request: RunTopsisRequest) -> Result<Self, Self::Error> {
        let dataset = match (request.dataset_csv, request.dataset_excel_base64) {
            (Some(csv), None) => DatasetUpload::Csv(csv),
            (None, Some(encoded)) => STANDARD
                .decode(encoded.trim())
                .map(DatasetUpload::Excel)
                .map_err(|e| DatasetError::Upload(format!("dataset_excel_base64: {}", e)))?,
            (Some(_), Some(_)) => {
                return Err(DatasetError::Upload(
                    "send either dataset_csv or dataset_excel_base64, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(DatasetError::Upload(
                    "dataset_csv or dataset_excel_base64 is required".to_string(),
                ))
            }
        };

        Ok(RunTopsisCommand {
            dataset,
            weights: request.weights,
            impacts: request.impacts,
            recipient: request.email,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One ranked alternative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRowResponse {
    pub cells: Vec<String>,
    pub score: f64,
    pub rank: u32,
}

impl From<ResultRow> for RankedRowResponse {
    fn from(row: ResultRow) -> Self {
        Self {
            cells: row.cells,
            score: row.score,
            rank: row.rank,
        }
    }
}

/// Response for a completed ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTopsisResponse {
    pub run_id: String,
    pub computed_at: String,
    /// Output columns, including the appended score and rank columns.
    pub columns: Vec<String>,
    /// Rows in input order.
    pub rows: Vec<RankedRowResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_to: Option<String>,
}

impl From<RunTopsisResult> for RunTopsisResponse {
    fn from(result: RunTopsisResult) -> Self {
        let columns = result.table.output_headers();
        Self {
            run_id: result.run_id.to_string(),
            computed_at: result.computed_at.to_string(),
            columns,
            rows: result.table.rows.into_iter().map(Into::into).collect(),
            delivered_to: result.delivered_to.map(|e| e.to_string()),
        }
    }
}

/// Liveness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ResultTable;
    use crate::domain::foundation::{EmailAddress, RunId, Timestamp};

    fn request(json: serde_json::Value) -> RunTopsisRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn request_email_is_optional() {
        let request = request(serde_json::json!({
            "dataset_csv": "a,b,c\nx,1,2",
            "weights": "1,1",
            "impacts": "+,+",
        }));

        assert!(request.email.is_none());
        let cmd = RunTopsisCommand::try_from(request).unwrap();
        assert_eq!(cmd.weights, "1,1");
        assert_eq!(cmd.dataset, DatasetUpload::Csv("a,b,c\nx,1,2".to_string()));
    }

    #[test]
    fn excel_upload_is_base64_decoded() {
        let cmd = RunTopsisCommand::try_from(request(serde_json::json!({
            "dataset_excel_base64": STANDARD.encode(b"PK\x03\x04"),
            "weights": "1",
            "impacts": "+",
        })))
        .unwrap();

        assert_eq!(cmd.dataset, DatasetUpload::Excel(b"PK\x03\x04".to_vec()));
    }

    #[test]
    fn upload_needs_exactly_one_dataset() {
        let neither = request(serde_json::json!({ "weights": "1", "impacts": "+" }));
        let both = request(serde_json::json!({
            "dataset_csv": "a,b\nx,1",
            "dataset_excel_base64": "UEs=",
            "weights": "1",
            "impacts": "+",
        }));

        for request in [neither, both] {
            assert!(matches!(
                RunTopsisCommand::try_from(request),
                Err(DatasetError::Upload(_))
            ));
        }
    }

    #[test]
    fn malformed_base64_is_an_upload_error() {
        let err = RunTopsisCommand::try_from(request(serde_json::json!({
            "dataset_excel_base64": "not base64!",
            "weights": "1",
            "impacts": "+",
        })))
        .unwrap_err();

        assert!(err.to_string().starts_with("Invalid dataset upload: dataset_excel_base64"));
    }

    #[test]
    fn response_lists_output_columns() {
        let result = RunTopsisResult {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            table: ResultTable {
                headers: vec!["Id".into(), "C1".into(), "C2".into()],
                rows: vec![ResultRow {
                    cells: vec!["x".into(), "1".into(), "2".into()],
                    score: 0.5,
                    rank: 1,
                }],
            },
            delivered_to: None,
        };

        let json = serde_json::to_value(RunTopsisResponse::from(result)).unwrap();

        assert_eq!(
            json["columns"],
            serde_json::json!(["Id", "C1", "C2", "Topsis Score", "Rank"])
        );
        assert_eq!(json["rows"][0]["rank"], 1);
        assert!(json.get("delivered_to").is_none());
    }

    #[test]
    fn response_reports_recipient() {
        let result = RunTopsisResult {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            table: ResultTable {
                headers: vec!["Id".into()],
                rows: vec![],
            },
            delivered_to: Some(EmailAddress::new("a@example.com").unwrap()),
        };

        let response = RunTopsisResponse::from(result);
        assert_eq!(response.delivered_to.as_deref(), Some("a@example.com"));
    }
}
