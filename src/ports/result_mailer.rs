//! Result Mailer Port - Out-of-band delivery of a ranking result.
//!
//! The ranking core never delivers anything itself. Application handlers
//! hand a finished artifact to an implementation of this port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EmailAddress;

/// Subject line used for result e-mails.
pub const RESULT_SUBJECT: &str = "TOPSIS Result";

/// Body text used for result e-mails.
pub const RESULT_BODY: &str = "Please find the attached TOPSIS result file.";

/// File name of the attached result.
pub const RESULT_FILENAME: &str = "topsis_result.csv";

/// A file attached to a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl Attachment {
    /// Creates an opaque binary attachment.
    pub fn octet_stream(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/octet-stream".to_string(),
            content,
        }
    }
}

/// A result ready to be sent to a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDelivery {
    pub recipient: EmailAddress,
    pub subject: String,
    pub body: String,
    pub attachment: Attachment,
}

impl ResultDelivery {
    /// Builds the standard delivery for a serialized CSV result.
    pub fn csv_result(recipient: EmailAddress, csv: impl Into<String>) -> Self {
        Self {
            recipient,
            subject: RESULT_SUBJECT.to_string(),
            body: RESULT_BODY.to_string(),
            attachment: Attachment::octet_stream(RESULT_FILENAME, csv.into().into_bytes()),
        }
    }
}

/// Errors from a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailerError {
    #[error("Mail provider rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Mail provider unreachable: {0}")]
    Network(String),

    #[error("Mail provider timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// Port for delivering ranking results.
///
/// # Contract
///
/// Implementations must:
/// - Deliver the attachment unchanged
/// - Hold their own credentials (passed in at construction)
/// - Return an error rather than silently dropping a delivery
#[async_trait]
pub trait ResultMailer: Send + Sync {
    /// Sends one result to its recipient.
    async fn send_result(&self, delivery: &ResultDelivery) -> Result<(), MailerError>;
}
