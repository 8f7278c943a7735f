//! Conversion of raw sheet records into schedule rows.

use std::path::Path;

use tracing::{info, info_span};
use tvguide_model::{CellValue, ScheduleRow, Timezone, columns};

use crate::table::{ScheduleTable, read_schedule_table};
use crate::error::{IngestError, Result};
use crate::schema::validate_columns;

struct ColumnIndexes {
    region: usize,
    date: usize,
    start_time: usize,
    end_time: usize,
    title: usize,
    season: usize,
    episode: usize,
    subtitle: usize,
    text_color: usize,
    bg_color: usize,
    timezone: usize,
}

impl ColumnIndexes {
    fn resolve(table: &ScheduleTable) -> Result<Self> {
        validate_columns(&table.headers)?;
        let index = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| IngestError::Schema(crate::SchemaError {
                    missing: name.to_string(),
                    found: table.headers.clone(),
                }))
        };
        Ok(Self {
            region: index(columns::REGION)?,
            date: index(columns::DATE)?,
            start_time: index(columns::START_TIME)?,
            end_time: index(columns::END_TIME)?,
            title: index(columns::TITLE)?,
            season: index(columns::SEASON)?,
            episode: index(columns::EPISODE)?,
            subtitle: index(columns::SUBTITLE)?,
            text_color: index(columns::TEXT_COLOR)?,
            bg_color: index(columns::BG_COLOR)?,
            timezone: index(columns::TIMEZONE)?,
        })
    }
}

fn cell(record: &[String], idx: usize) -> &str {
    record.get(idx).map(String::as_str).unwrap_or("")
}

fn required(record: &[String], idx: usize, column: &str, line: usize) -> Result<String> {
    let value = cell(record, idx);
    if value.is_empty() {
        return Err(IngestError::MissingValue {
            line,
            column: column.to_string(),
        });
    }
    Ok(value.to_string())
}

fn optional(record: &[String], idx: usize) -> Option<String> {
    let value = cell(record, idx);
    (!value.is_empty()).then(|| value.to_string())
}

/// Converts every data record of a table into a [`ScheduleRow`].
///
/// Fails with a schema error before touching any record when a required
/// column is missing. Rows are returned in source order; `line` in row errors
/// is the source line the record started on.
pub fn rows_from_table(table: &ScheduleTable) -> Result<Vec<ScheduleRow>> {
    let idx = ColumnIndexes::resolve(table)?;
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let line = row.line;
        let record = row.cells.as_slice();
        let timezone_raw = required(record, idx.timezone, columns::TIMEZONE, line)?;
        let timezone: Timezone = timezone_raw
            .parse()
            .map_err(|source| IngestError::InvalidTimezone { line, source })?;
        rows.push(ScheduleRow {
            region: required(record, idx.region, columns::REGION, line)?,
            date: required(record, idx.date, columns::DATE, line)?,
            start_time: required(record, idx.start_time, columns::START_TIME, line)?,
            end_time: required(record, idx.end_time, columns::END_TIME, line)?,
            title: required(record, idx.title, columns::TITLE, line)?,
            season: optional(record, idx.season).map(|raw| CellValue::from_raw(&raw)),
            episode: optional(record, idx.episode).map(|raw| CellValue::from_raw(&raw)),
            subtitle: optional(record, idx.subtitle),
            text_color: optional(record, idx.text_color),
            background_color: optional(record, idx.bg_color),
            timezone,
        });
    }
    Ok(rows)
}

/// Reads, checks and converts a schedule sheet in one step.
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduleRow>> {
    let span = info_span!("ingest", source = %path.display());
    let _guard = span.enter();
    let table = read_schedule_table(path)?;
    let rows = rows_from_table(&table)?;
    info!(row_count = rows.len(), "schedule rows loaded");
    Ok(rows)
}
