//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Delivery Ports
//!
//! - `ResultMailer` - Sends a finished ranking to a recipient

mod result_mailer;

pub use result_mailer::{
    Attachment, MailerError, ResultDelivery, ResultMailer, RESULT_BODY, RESULT_FILENAME,
    RESULT_SUBJECT,
};
