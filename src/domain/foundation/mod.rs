//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary shared by the ranking domain.

mod email_address;
mod errors;
mod ids;
mod timestamp;

pub use email_address::EmailAddress;
pub use errors::ValidationError;
pub use ids::RunId;
pub use timestamp::Timestamp;
