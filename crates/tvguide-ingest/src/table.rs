//! The raw sheet shared by every source format.

use std::path::Path;

use tracing::debug;

use crate::csv_table::read_csv_records;
use crate::error::{IngestError, Result};
use crate::workbook::{is_workbook, read_workbook_records};

/// One non-blank source record and the 1-based line (or sheet row) it
/// started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// A raw sheet: the header row and the data rows below it.
///
/// Data rows are padded or truncated to the header width.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ScheduleTable {
    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds a table from raw records: blank records are dropped, the first
    /// remaining one is the header.
    pub(crate) fn from_records<I>(path: &Path, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = TableRow>,
    {
        let mut records = records
            .into_iter()
            .map(|record| TableRow {
                line: record.line,
                cells: record.cells.iter().map(|cell| normalize_cell(cell)).collect(),
            })
            .filter(|record| !record.cells.iter().all(String::is_empty));
        let Some(header_row) = records.next() else {
            return Err(IngestError::EmptySource {
                path: path.to_path_buf(),
            });
        };
        let headers: Vec<String> = header_row
            .cells
            .iter()
            .map(String::as_str)
            .map(normalize_header)
            .collect();
        let rows: Vec<TableRow> = records
            .map(|mut record| {
                record.cells.resize(headers.len(), String::new());
                record
            })
            .collect();
        Ok(Self { headers, rows })
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads the schedule sheet at `path`.
///
/// Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read from their
/// first worksheet; anything else is read as CSV. The first non-blank row is
/// the header and blank rows are skipped. Each data row keeps the line it
/// came from.
pub fn read_schedule_table(path: &Path) -> Result<ScheduleTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let records = if is_workbook(path) {
        read_workbook_records(path)?
    } else {
        read_csv_records(path)?
    };
    let table = ScheduleTable::from_records(path, records)?;
    debug!(
        path = %path.display(),
        column_count = table.headers.len(),
        row_count = table.len(),
        "read schedule table"
    );
    Ok(table)
}
