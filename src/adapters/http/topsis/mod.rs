//! Ranking HTTP adapter module.
//!
//! Provides the REST endpoint for TOPSIS runs and a liveness check.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{TopsisApiError, TopsisAppState};
pub use routes::topsis_router;
