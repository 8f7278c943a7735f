//! Error types for schedule ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// A source sheet is missing a required column.
///
/// This is a hard stop: no rows are converted when the header is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required column: {missing} (found columns: {})", .found.join(", "))]
pub struct SchemaError {
    pub missing: String,
    pub found: Vec<String>,
}

/// Errors that can occur while reading a schedule sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("schedule file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === Workbook Errors ===
    /// Failed to open or read a spreadsheet workbook.
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Workbook has no worksheet to read.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Source has no header row.
    #[error("schedule source is empty: {path}")]
    EmptySource { path: PathBuf },

    // === Schema Errors ===
    #[error(transparent)]
    Schema(#[from] SchemaError),

    // === Row Errors ===
    /// A required cell is blank.
    #[error("line {line}: required column '{column}' is empty")]
    MissingValue { line: usize, column: String },

    /// A row's timezone is outside the closed set.
    #[error("line {line}: {source}")]
    InvalidTimezone {
        line: usize,
        #[source]
        source: tvguide_model::ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
