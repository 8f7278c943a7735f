use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use tvguide_ingest::{IngestError, load_schedule, read_schedule_table};
use tvguide_model::{CellValue, REQUIRED_COLUMNS, Timezone};

/// Writes a one-sheet workbook: `header_row` holds the column names, data
/// rows follow with an empty row between them.
fn write_workbook(path: &Path, header_row: u32, rows: &[[&str; 11]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet
            .write_string(header_row, col as u16, *name)
            .expect("write header");
    }
    for (index, row) in rows.iter().enumerate() {
        let sheet_row = header_row + 1 + 2 * index as u32;
        for (col, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col = col as u16;
            let written = match value.parse::<f64>() {
                Ok(number) => sheet.write_number(sheet_row, col, number),
                Err(_) => sheet.write_string(sheet_row, col, *value),
            };
            written.expect("write cell");
        }
    }
    workbook.save(path).expect("save workbook");
}

fn workbook_path(dir: &TempDir) -> PathBuf {
    dir.path().join("schedule.xlsx")
}

#[test]
fn reads_first_worksheet_like_a_csv_export() {
    let dir = TempDir::new().expect("temp dir");
    let path = workbook_path(&dir);
    write_workbook(
        &path,
        1,
        &[
            [
                "South Africa",
                "Monday, October 6, 2025",
                "5:30",
                "6:00",
                "Morning Show",
                "2",
                "14",
                "Pilot",
                "",
                "",
                "CAT",
            ],
            [
                "Rest Of Africa",
                "Monday, October 6, 2025",
                "12:00",
                "13:00",
                "Movie",
                "",
                "Finale",
                "",
                "#fff",
                "#000",
                "WAT",
            ],
        ],
    );

    let table = read_schedule_table(&path).expect("read workbook");
    assert_eq!(table.headers, REQUIRED_COLUMNS.to_vec());
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].line, 3);
    assert_eq!(table.rows[1].line, 5);

    let rows = load_schedule(&path).expect("load rows");
    assert_eq!(rows[0].region, "South Africa");
    assert_eq!(rows[0].start_time, "5:30");
    assert_eq!(rows[0].season, Some(CellValue::Integer(2)));
    assert_eq!(rows[0].episode, Some(CellValue::Integer(14)));
    assert_eq!(rows[0].timezone, Timezone::Cat);
    assert_eq!(rows[1].season, None);
    assert_eq!(rows[1].episode, Some(CellValue::Text("Finale".to_string())));
    assert_eq!(rows[1].background_color.as_deref(), Some("#000"));
}

#[test]
fn workbook_row_errors_name_the_sheet_row() {
    let dir = TempDir::new().expect("temp dir");
    let path = workbook_path(&dir);
    write_workbook(
        &path,
        0,
        &[
            ["A", "d", "5:00", "6:00", "News", "", "", "", "", "", "CAT"],
            ["A", "d", "6:00", "7:00", "Movie", "", "", "", "", "", "GMT"],
        ],
    );
    let err = load_schedule(&path).expect_err("bad timezone");
    assert!(matches!(err, IngestError::InvalidTimezone { line: 4, .. }));
}

#[test]
fn corrupt_workbook_is_a_workbook_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = workbook_path(&dir);
    fs::write(&path, b"PK\x03\x04 not a workbook").expect("write file");
    let err = read_schedule_table(&path).expect_err("corrupt");
    assert!(matches!(err, IngestError::Workbook { .. }));
}
