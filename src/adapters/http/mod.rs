//! HTTP adapters - REST API implementations.

pub mod topsis;

pub use topsis::topsis_router;
pub use topsis::TopsisAppState;
