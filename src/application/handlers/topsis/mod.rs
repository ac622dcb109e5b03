//! TOPSIS handlers - Ranking runs and result delivery.

mod run_topsis;

pub use run_topsis::{DatasetUpload, RunTopsisCommand, RunTopsisError, RunTopsisHandler, RunTopsisResult};
