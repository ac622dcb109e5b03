//! CSV result writer - Serializes a [`ResultTable`].

use csv::WriterBuilder;
use std::fs;
use std::path::Path;

use crate::domain::analysis::ResultTable;

use super::DatasetError;

/// Writes the augmented table: original columns, then score and rank.
pub struct CsvResultWriter;

impl CsvResultWriter {
    /// Serializes to CSV bytes.
    pub fn to_bytes(table: &ResultTable) -> Result<Vec<u8>, DatasetError> {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

        writer.write_record(table.output_headers())?;
        for row in &table.rows {
            let mut record = row.cells.clone();
            record.push(row.score.to_string());
            record.push(row.rank.to_string());
            writer.write_record(&record)?;
        }

        writer
            .into_inner()
            .map_err(|e| DatasetError::Io(e.to_string()))
    }

    /// Serializes to a CSV string.
    pub fn to_string(table: &ResultTable) -> Result<String, DatasetError> {
        let bytes = Self::to_bytes(table)?;
        String::from_utf8(bytes).map_err(|e| DatasetError::Io(e.to_string()))
    }

    /// Writes the CSV to `path`, replacing any existing file.
    pub fn write_path(table: &ResultTable, path: &Path) -> Result<(), DatasetError> {
        let bytes = Self::to_bytes(table)?;
        fs::write(path, bytes).map_err(|e| DatasetError::Io(e.to_string()))
    }
}
