//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod topsis;

pub use topsis::{DatasetUpload, RunTopsisCommand, RunTopsisError, RunTopsisHandler, RunTopsisResult};
