//! TOPSIS Ranker - Multi-criteria ranking of alternatives
//!
//! This crate ranks a decision matrix with TOPSIS (Technique for Order of
//! Preference by Similarity to Ideal Solution) and exposes it through a
//! CLI, an HTTP service, and optional e-mail delivery of the result file.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
