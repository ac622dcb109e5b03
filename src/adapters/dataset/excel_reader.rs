//! Excel table reader - Loads a [`RawTable`] from the first worksheet of a
//! workbook (`.xlsx` or `.xls`).

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use tracing::debug;

use crate::domain::analysis::RawTable;

use super::DatasetError;

/// Reads spreadsheet input. The first non-blank row is the header row.
pub struct ExcelTableReader;

impl ExcelTableReader {
    /// Parses workbook bytes; the container format is sniffed from content.
    pub fn parse_bytes(content: &[u8]) -> Result<RawTable, DatasetError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(content.to_vec()))?;
        let range = workbook.worksheet_range_at(0).ok_or(DatasetError::Empty)??;

        let mut rows = range
            .rows()
            .map(Self::row_cells)
            .filter(|cells| !cells.is_empty());

        let headers = rows.next().ok_or(DatasetError::Empty)?;
        let rows: Vec<Vec<String>> = rows.collect();

        debug!(columns = headers.len(), rows = rows.len(), "Parsed worksheet");
        Ok(RawTable { headers, rows })
    }

    /// Renders cells as text. Trailing blank cells are dropped so a short
    /// row stays short instead of being padded to the sheet width.
    fn row_cells(row: &[Data]) -> Vec<String> {
        let width = row
            .iter()
            .rposition(|cell| !matches!(cell, Data::Empty))
            .map_or(0, |last| last + 1);

        row[..width].iter().map(ToString::to_string).collect()
    }
}
