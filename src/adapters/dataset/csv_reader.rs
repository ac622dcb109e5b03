//! CSV table reader - Loads a [`RawTable`] from CSV text.

use csv::ReaderBuilder;
use tracing::debug;

use crate::domain::analysis::RawTable;

use super::DatasetError;

/// Reads CSV input. The first record is always the header row.
pub struct CsvTableReader;

impl CsvTableReader {
    /// Parses CSV text.
    ///
    /// Rows may have a different width than the header; the validator
    /// reports those as schema errors with the row number.
    pub fn parse_str(content: &str) -> Result<RawTable, DatasetError> {
        Self::parse_bytes(content.as_bytes())
    }

    /// Parses CSV bytes (UTF-8, optional BOM).
    pub fn parse_bytes(content: &[u8]) -> Result<RawTable, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let headers: Vec<String> = reader
            .headers()
            .map_err(DatasetError::from)?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(DatasetError::Empty);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV table");
        Ok(RawTable { headers, rows })
    }
}
