//! Recording Mailer - In-memory ResultMailer for tests and local runs.
//!
//! Keeps every delivery instead of sending it, and can be told to fail.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{MailerError, ResultDelivery, ResultMailer};

/// Mailer that records deliveries.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<ResultDelivery>>>,
    failure: Option<MailerError>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mailer whose every send fails with `error`.
    pub fn failing(error: MailerError) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: Some(error),
        }
    }

    /// Returns a copy of everything delivered so far.
    pub fn sent(&self) -> Vec<ResultDelivery> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResultMailer for RecordingMailer {
    async fn send_result(&self, delivery: &ResultDelivery) -> Result<(), MailerError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(delivery.clone());
        }
        Ok(())
    }
}
