//! Dataset reader - Picks a table reader from the file extension.

use std::fs;
use std::path::Path;

use crate::domain::analysis::RawTable;

use super::{CsvTableReader, DatasetError, ExcelTableReader};

/// Formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Excel,
}

impl InputFormat {
    /// Detects the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xls" => Ok(InputFormat::Excel),
            _ => Err(DatasetError::UnsupportedFormat(extension)),
        }
    }
}

/// Reads a dataset in any supported format.
pub struct DatasetReader;

impl DatasetReader {
    /// Parses raw content of a known format.
    pub fn parse_bytes(format: InputFormat, content: &[u8]) -> Result<RawTable, DatasetError> {
        match format {
            InputFormat::Csv => CsvTableReader::parse_bytes(content),
            InputFormat::Excel => ExcelTableReader::parse_bytes(content),
        }
    }

    /// Reads a table from disk after checking existence and format.
    pub fn read_path(path: &Path) -> Result<RawTable, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }

        let format = InputFormat::from_path(path)?;
        let content = fs::read(path).map_err(|e| DatasetError::Io(e.to_string()))?;
        Self::parse_bytes(format, &content)
    }
}
