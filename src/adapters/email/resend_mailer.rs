//! Resend Mailer - Implementation of ResultMailer over Resend's HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = EmailConfig::new(api_key);
//! let mailer = ResendMailer::new(&config)?;
//! mailer.send_result(&delivery).await?;
//! ```
//!
//! Credentials come only from the [`EmailConfig`] handed to the constructor.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::EmailConfig;
use crate::ports::{MailerError, ResultDelivery, ResultMailer};

/// Resend API mailer.
pub struct ResendMailer {
    api_key: Secret<String>,
    from: String,
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl ResendMailer {
    /// Creates a mailer from validated e-mail configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, MailerError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MailerError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.resend_api_key.clone(),
            from: config.from_header(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Builds the emails endpoint URL.
    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }

    /// Converts a delivery to Resend's request format.
    fn to_resend_request(&self, delivery: &ResultDelivery) -> ResendRequest {
        ResendRequest {
            from: self.from.clone(),
            to: vec![delivery.recipient.to_string()],
            subject: delivery.subject.clone(),
            text: delivery.body.clone(),
            attachments: vec![ResendAttachment {
                filename: delivery.attachment.filename.clone(),
                content: STANDARD.encode(&delivery.attachment.content),
                content_type: delivery.attachment.content_type.clone(),
            }],
        }
    }
}

#[async_trait]
impl ResultMailer for ResendMailer {
    async fn send_result(&self, delivery: &ResultDelivery) -> Result<(), MailerError> {
        let request = self.to_resend_request(delivery);

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailerError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    MailerError::Network(format!("Connection failed: {}", e))
                } else {
                    MailerError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Resend rejected result delivery");
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!(recipient = %delivery.recipient, "Delivered result via Resend");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    attachments: Vec<ResendAttachment>,
}

#[derive(Debug, Serialize)]
struct ResendAttachment {
    filename: String,
    content: String,
    content_type: String,
}
