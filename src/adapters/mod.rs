//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the ranking core to external systems:
//! - `dataset` - CSV/Excel ingestion and result serialization
//! - `email` - Result delivery (Resend, in-memory)
//! - `http` - REST endpoints

pub mod dataset;
pub mod email;
pub mod http;

pub use email::{RecordingMailer, ResendMailer};
