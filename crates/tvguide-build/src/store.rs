//! Reading and writing persisted datasets.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use tvguide_model::Dataset;

use crate::error::StoreError;

const INLINE_SOURCE: &str = "<inline>";

/// Writes `dataset` as pretty-printed JSON.
///
/// Parent directories are created as needed. The document goes to a sibling
/// temporary file first and is renamed over `path`, so a failed write never
/// leaves a truncated dataset behind.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(dataset).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let staging = staging_path(path);
    debug!(path = %staging.display(), "writing staged dataset");
    if let Err(error) = fs::write(&staging, json) {
        let _ = fs::remove_file(&staging);
        return Err(StoreError::io(&staging, error));
    }
    if let Err(error) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(StoreError::io(path, error));
    }
    info!(path = %path.display(), row_count = dataset.rows.len(), "dataset written");
    Ok(())
}

/// Loads a persisted dataset from disk and re-checks its invariants.
pub fn read_dataset(path: &Path) -> Result<Dataset, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    decode(&text, path)
}

/// Parses a dataset document held in memory.
pub fn parse_dataset(text: &str) -> Result<Dataset, StoreError> {
    decode(text, Path::new(INLINE_SOURCE))
}

fn decode(text: &str, origin: &Path) -> Result<Dataset, StoreError> {
    let dataset: Dataset = serde_json::from_str(text).map_err(|source| StoreError::Json {
        path: origin.to_path_buf(),
        source,
    })?;
    dataset.validate().map_err(|source| StoreError::Invalid {
        path: origin.to_path_buf(),
        source,
    })?;
    Ok(dataset)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
