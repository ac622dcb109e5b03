//! RunTopsisHandler - Command handler for ranking an uploaded dataset.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::dataset::{CsvResultWriter, CsvTableReader, DatasetError, ExcelTableReader};
use crate::domain::analysis::{
    RawTable, ResultTable, TopsisAnalyzer, TopsisError, ValidationOptions,
};
use crate::domain::foundation::{EmailAddress, RunId, Timestamp, ValidationError};
use crate::ports::{MailerError, ResultDelivery, ResultMailer};

/// Uploaded dataset content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetUpload {
    /// CSV text
    Csv(String),
    /// Workbook bytes (`.xlsx`, `.xls`)
    Excel(Vec<u8>),
}

impl DatasetUpload {
    fn parse(&self) -> Result<RawTable, DatasetError> {
        match self {
            DatasetUpload::Csv(text) => CsvTableReader::parse_str(text),
            DatasetUpload::Excel(bytes) => ExcelTableReader::parse_bytes(bytes),
        }
    }
}

/// Command to rank an uploaded dataset.
#[derive(Debug, Clone)]
pub struct RunTopsisCommand {
    pub dataset: DatasetUpload,
    pub weights: String,
    pub impacts: String,
    /// Address to send the result file to, if any.
    pub recipient: Option<String>,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RunTopsisResult {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub table: ResultTable,
    pub delivered_to: Option<EmailAddress>,
}

/// Errors from a ranking run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunTopsisError {
    #[error("{0}")]
    Dataset(#[from] DatasetError),

    #[error("{0}")]
    Analysis(#[from] TopsisError),

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(ValidationError),

    #[error("Result delivery is not configured on this server")]
    DeliveryUnavailable,

    #[error("Result delivery failed: {0}")]
    Delivery(#[from] MailerError),
}

impl RunTopsisError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            RunTopsisError::Dataset(DatasetError::Upload(_)) => "INVALID_UPLOAD",
            RunTopsisError::Dataset(_) => "SCHEMA_ERROR",
            RunTopsisError::Analysis(e) => e.code(),
            RunTopsisError::InvalidRecipient(_) => "INVALID_EMAIL",
            RunTopsisError::DeliveryUnavailable => "DELIVERY_UNAVAILABLE",
            RunTopsisError::Delivery(_) => "DELIVERY_FAILED",
        }
    }
}

/// Handler for ranking runs.
pub struct RunTopsisHandler {
    mailer: Option<Arc<dyn ResultMailer>>,
    options: ValidationOptions,
}

impl RunTopsisHandler {
    pub fn new(mailer: Option<Arc<dyn ResultMailer>>, options: ValidationOptions) -> Self {
        Self { mailer, options }
    }

    pub async fn handle(&self, cmd: RunTopsisCommand) -> Result<RunTopsisResult, RunTopsisError> {
        let run_id = RunId::new();

        // 1. Resolve delivery target before doing any work
        let delivery_target = match cmd.recipient.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let recipient =
                    EmailAddress::new(raw).map_err(RunTopsisError::InvalidRecipient)?;
                let mailer = self
                    .mailer
                    .as_ref()
                    .ok_or(RunTopsisError::DeliveryUnavailable)?;
                Some((recipient, mailer))
            }
        };

        // 2. Parse and rank
        let table = cmd.dataset.parse()?;
        let result = TopsisAnalyzer::evaluate(&table, &cmd.weights, &cmd.impacts, self.options)
            .map_err(|e| {
                warn!(%run_id, code = e.code(), error = %e, "Rejected ranking input");
                e
            })?;
        let computed_at = Timestamp::now();

        // 3. Deliver
        let delivered_to = match delivery_target {
            Some((recipient, mailer)) => {
                let csv = CsvResultWriter::to_string(&result)?;
                let delivery = ResultDelivery::csv_result(recipient.clone(), csv);
                mailer.send_result(&delivery).await.map_err(|e| {
                    warn!(%run_id, error = %e, "Result delivery failed");
                    e
                })?;
                Some(recipient)
            }
            None => None,
        };

        info!(
            %run_id,
            alternatives = result.len(),
            criteria = result.headers.len().saturating_sub(1),
            delivered = delivered_to.is_some(),
            "Completed TOPSIS run"
        );

        Ok(RunTopsisResult {
            run_id,
            computed_at,
            table: result,
            delivered_to,
        })
    }
}
