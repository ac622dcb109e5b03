//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates the ranking core, the CSV adapters, and the
//! result mailer port.

pub mod handlers;

pub use handlers::{DatasetUpload, RunTopsisCommand, RunTopsisError, RunTopsisHandler, RunTopsisResult};
