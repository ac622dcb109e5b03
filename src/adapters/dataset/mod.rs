//! Dataset adapters - Tabular ingestion (CSV, Excel) and result serialization.

mod csv_reader;
mod excel_reader;
mod result_writer;
mod table_reader;

pub use csv_reader::CsvTableReader;
pub use excel_reader::ExcelTableReader;
pub use result_writer::CsvResultWriter;
pub use table_reader::{DatasetReader, InputFormat};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing tabular data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format '{0}'. Use CSV or Excel.")]
    UnsupportedFormat(String),

    #[error("Input contains no header row")]
    Empty,

    #[error("Malformed CSV: {0}")]
    Malformed(String),

    #[error("Unreadable workbook: {0}")]
    Workbook(String),

    #[error("Invalid dataset upload: {0}")]
    Upload(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<csv::Error> for DatasetError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            DatasetError::Io(error.to_string())
        } else {
            DatasetError::Malformed(error.to_string())
        }
    }
}

impl From<calamine::Error> for DatasetError {
    fn from(error: calamine::Error) -> Self {
        DatasetError::Workbook(error.to_string())
    }
}
