//! Spreadsheet workbooks, read from their first worksheet.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::{Duration, NaiveDate};
use tvguide_model::DAY_LABEL_FORMAT;

use crate::error::{IngestError, Result};
use crate::table::TableRow;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

const MINUTES_PER_DAY: f64 = 1440.0;

pub(crate) fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Reads every row of the workbook's first worksheet.
///
/// `line` is the 1-based sheet row, so a leading blank area in the sheet
/// still yields the row numbers a spreadsheet user sees.
pub(crate) fn read_workbook_records(path: &Path) -> Result<Vec<TableRow>> {
    let workbook_error = |source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let Some(first_sheet) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoWorksheet {
            path: path.to_path_buf(),
        });
    };
    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(workbook_error)?;
    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    Ok(range
        .rows()
        .enumerate()
        .map(|(offset, cells)| TableRow {
            line: first_row + offset + 1,
            cells: cells.iter().map(cell_text).collect(),
        })
        .collect())
}

/// Text of one workbook cell as it would appear in a CSV export.
///
/// Whole numbers drop the `.0`. Date-time cells below one day are slot times
/// (`H:MM`); whole dates become day labels.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => number_text(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => serial_text(value.as_f64()),
    }
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn serial_text(serial: f64) -> String {
    if (0.0..1.0).contains(&serial) {
        let minutes = (serial * MINUTES_PER_DAY).round() as i64;
        return format!("{}:{:02}", minutes / 60, minutes % 60);
    }
    let days = serial.trunc() as i64;
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .zip(Duration::try_days(days))
        .and_then(|(epoch, offset)| epoch.checked_add_signed(offset))
        .map_or_else(
            || number_text(serial),
            |date| date.format(DAY_LABEL_FORMAT).to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_workbook_extensions() {
        assert!(is_workbook(Path::new("guide.xlsx")));
        assert!(is_workbook(Path::new("guide.XLS")));
        assert!(is_workbook(Path::new("guide.ods")));
        assert!(!is_workbook(Path::new("guide.csv")));
        assert!(!is_workbook(Path::new("guide")));
    }

    #[test]
    fn numbers_read_like_a_csv_export() {
        assert_eq!(cell_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(12)), "12");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("CAT".to_string())), "CAT");
    }

    #[test]
    fn serial_times_and_dates_become_labels() {
        assert_eq!(serial_text(5.5 / 24.0), "5:30");
        assert_eq!(serial_text(0.0), "0:00");
        assert_eq!(serial_text(45936.0), "Monday, October 6, 2025");
    }
}
