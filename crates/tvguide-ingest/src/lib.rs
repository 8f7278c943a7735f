//! Ingestion of schedule sheets from spreadsheet workbooks or CSV exports.

mod csv_table;
pub mod error;
pub mod rows;
pub mod schema;
pub mod table;
mod workbook;

pub use error::{IngestError, Result, SchemaError};
pub use rows::{load_schedule, rows_from_table};
pub use schema::{missing_columns, validate_columns};
pub use table::{ScheduleTable, TableRow, read_schedule_table};
