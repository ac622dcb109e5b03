//! Analysis Module - Pure TOPSIS ranking.
//!
//! This module contains stateless functions that turn a decision matrix,
//! a weight vector and an impact vector into a score and dense rank per
//! alternative.
//!
//! # Components
//!
//! - `Validator` - Shape, numeric and vector-length checks; token parsing
//! - `Normalizer` - Euclidean column normalization
//! - `Weighter` - Column weighting
//! - `IdealSolver` - Direction-aware ideal-best / ideal-worst vectors
//! - `DistanceCalculator` - Euclidean distance to both ideals
//! - `Ranker` - Relative-closeness score and dense ranking
//! - `TopsisAnalyzer` - The stages above chained into one call
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Reading files,
//! delivering results and presenting errors are handled by adapters.

mod dataset;
mod decision_matrix;
mod distance_calculator;
mod errors;
mod ideal_solver;
mod normalizer;
mod ranker;
mod topsis_analyzer;
mod validator;
mod weighter;

// Re-export all public types
pub use dataset::{RawTable, ResultRow, ResultTable, RANK_COLUMN, SCORE_COLUMN};
pub use decision_matrix::{DecisionMatrix, Impact, ImpactVector, WeightVector, MIN_CRITERIA};
pub use distance_calculator::{DistanceCalculator, Distances};
pub use errors::{TopsisError, VectorKind};
pub use ideal_solver::{IdealPoint, IdealSolver};
pub use normalizer::{NormalizedMatrix, Normalizer};
pub use ranker::Ranker;
pub use topsis_analyzer::{Ranking, TopsisAnalyzer};
pub use validator::{ValidatedInput, ValidationOptions, Validator, TOKEN_SEPARATOR};
pub use weighter::{WeightedMatrix, Weighter};
