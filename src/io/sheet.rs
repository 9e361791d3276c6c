use std::path::PathBuf;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ParadeError, Result};

/// A fully-materialised table of string cells with a header row, as handed
/// to the core by a sheet source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Cell at the zero-based data-row and column index, if present.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Source of attendance tables. Failures (missing file, unreadable
/// workbook) propagate to the caller; the core never retries.
pub trait SheetSource {
    /// Fetches the named worksheet as a string table.
    fn fetch(&self, sheet: &str) -> Result<SheetTable>;
}

/// Sheet source backed by a local Excel workbook.
#[derive(Debug, Clone)]
pub struct XlsxSheetSource {
    path: PathBuf,
}

impl XlsxSheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SheetSource for XlsxSheetSource {
    fn fetch(&self, sheet: &str) -> Result<SheetTable> {
        if !self.path.exists() {
            return Err(ParadeError::SourceUnavailable(format!(
                "workbook not found: {}",
                self.path.display()
            )));
        }

        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;
        let range = workbook
            .worksheet_range(sheet)
            .ok_or_else(|| ParadeError::MissingSheet(sheet.to_string()))?
            .map_err(ParadeError::from)?;

        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|cell| cell_to_string(Some(cell)))
                .collect(),
            None => Vec::new(),
        };
        let rows = rows
            .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
            .collect();

        Ok(SheetTable { headers, rows })
    }
}

/// Resolves the AM/PM column pair for the report date.
///
/// Scans the header row, then the first data row (dates often sit in a
/// merged cell below the headers), for a `DD/MM/YYYY` substring; the PM
/// column is assumed to follow the AM column. On a miss the configured
/// fallback pair is returned rather than an error.
pub fn find_date_columns(
    table: &SheetTable,
    target_date: NaiveDate,
    fallback: (usize, usize),
) -> (usize, usize) {
    let needle = target_date.format("%d/%m/%Y").to_string();

    for (index, header) in table.headers.iter().enumerate() {
        if header.contains(&needle) {
            return (index, index + 1);
        }
    }

    if let Some(first_row) = table.rows.first() {
        for (index, cell) in first_row.iter().enumerate() {
            if cell.contains(&needle) {
                return (index, index + 1);
            }
        }
    }

    debug!(%needle, ?fallback, "report date not found in sheet, using fallback columns");
    fallback
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SheetTable {
        SheetTable {
            headers: vec!["Name".into(), "".into(), "".into(), "01/05/2025".into()],
            rows: vec![vec![
                "".into(),
                "30/04/2025".into(),
                "".into(),
                "".into(),
            ]],
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn header_match_wins_over_first_row() {
        let columns = find_date_columns(
            &table(),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            (1, 2),
        );
        assert_eq!(columns, (3, 4));
    }

    #[test]
    fn first_data_row_is_scanned_for_merged_date_cells() {
        assert_eq!(find_date_columns(&table(), date(30), (9, 9)), (1, 2));
    }

    #[test]
    fn missing_date_falls_back_to_the_configured_pair() {
        assert_eq!(find_date_columns(&table(), date(2), (5, 6)), (5, 6));
    }

    #[test]
    fn missing_workbook_reports_source_unavailable() {
        let source = XlsxSheetSource::new("/nonexistent/roster.xlsx");
        let error = source.fetch("Sheet1").unwrap_err();
        assert!(matches!(error, ParadeError::SourceUnavailable(_)));
    }
}
