//! Header checks for schedule sheets.

use tvguide_model::REQUIRED_COLUMNS;

use crate::error::SchemaError;

/// Verifies that `headers` contain every required column.
///
/// Extra columns are ignored. The first missing column (in sheet order) is
/// reported together with every column that was found.
pub fn validate_columns<S: AsRef<str>>(headers: &[S]) -> Result<(), SchemaError> {
    match missing_columns(headers).into_iter().next() {
        Some(missing) => Err(SchemaError {
            missing: missing.to_string(),
            found: headers.iter().map(|h| h.as_ref().to_string()).collect(),
        }),
        None => Ok(()),
    }
}

/// Required columns absent from `headers`, in sheet order.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == *required))
        .collect()
}
