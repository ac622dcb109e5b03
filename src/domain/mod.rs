//! Domain layer containing the ranking logic and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, e-mail addresses)
//! - `analysis` - Pure TOPSIS ranking (validation through dense ranking)

pub mod analysis;
pub mod foundation;
