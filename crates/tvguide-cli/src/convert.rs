//! The build step: schedule sheet in, persisted dataset out.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tvguide_build::{BuildRequest, BuildWarning, build_dataset, write_dataset};
use tvguide_ingest::load_schedule;
use tvguide_model::TimezoneMap;

/// Inputs of one conversion, as given on the command line.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source: PathBuf,
    pub channel_id: String,
    pub regions: String,
    pub timezone_map: String,
    pub output: PathBuf,
}

/// What a successful conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub row_count: usize,
    pub regions: Vec<String>,
    pub timezones_by_region: TimezoneMap,
    pub warnings: Vec<BuildWarning>,
}

/// Reads, validates, builds and writes a dataset.
///
/// The output file is only written after every check has passed; any failure
/// leaves the output path untouched.
pub fn run_convert(request: &ConvertRequest) -> Result<ConvertSummary> {
    let span = info_span!("convert", channel_id = %request.channel_id);
    let _guard = span.enter();
    let start = Instant::now();

    let rows = load_schedule(&request.source)
        .with_context(|| format!("load schedule {}", request.source.display()))?;
    let row_count = rows.len();

    let outcome = build_dataset(BuildRequest {
        channel_id: request.channel_id.clone(),
        regions: request.regions.clone(),
        timezone_map: request.timezone_map.clone(),
        rows,
    })
    .context("build dataset")?;

    let write_span = info_span!("write", output = %request.output.display());
    write_span
        .in_scope(|| write_dataset(&request.output, &outcome.dataset))
        .with_context(|| format!("write dataset {}", request.output.display()))?;

    info!(
        row_count,
        warning_count = outcome.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    let dataset = outcome.dataset;
    Ok(ConvertSummary {
        source: request.source.clone(),
        output: request.output.clone(),
        row_count,
        regions: dataset.regions,
        timezones_by_region: dataset.timezones_by_region,
        warnings: outcome.warnings,
    })
}
