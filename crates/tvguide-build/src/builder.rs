//! Assembly of a [`Dataset`] from validated rows and caller declarations.

use std::fmt;

use tracing::{info, info_span, warn};
use tvguide_model::{Dataset, ScheduleRow, TimezoneMap};

use crate::declarations::{parse_region_list, parse_timezone_map};
use crate::error::BuildError;

/// Raw inputs of a build: the caller's declarations exactly as given on the
/// command line, plus rows that already passed the column check.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub channel_id: String,
    /// Comma-delimited region names.
    pub regions: String,
    /// JSON object mapping region name to timezone codes.
    pub timezone_map: String,
    pub rows: Vec<ScheduleRow>,
}

/// A non-fatal finding reported while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// Rows reference a region that was not declared.
    UnknownRegion { region: String, row_count: usize },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRegion { region, row_count } => write!(
                f,
                "region \"{region}\" found in data but not in regions list ({row_count} rows)"
            ),
        }
    }
}

/// A built dataset and the warnings raised along the way.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub dataset: Dataset,
    pub warnings: Vec<BuildWarning>,
}

/// Parses the declarations and assembles the dataset.
///
/// The timezone map is parsed first, so a malformed map fails before any
/// region cross-check runs.
pub fn build_dataset(request: BuildRequest) -> Result<BuildOutcome, BuildError> {
    let BuildRequest {
        channel_id,
        regions,
        timezone_map,
        rows,
    } = request;
    let timezones_by_region = parse_timezone_map(&timezone_map)?;
    let regions = parse_region_list(&regions);
    assemble_dataset(channel_id, regions, timezones_by_region, rows)
}

/// Cross-checks already parsed declarations against the rows.
///
/// Rows naming an undeclared region produce a warning and are kept. A
/// declared region without a timezone mapping is fatal, as is any other
/// breach of the dataset invariants (repeated region, empty timezone list).
/// Rows are carried through untouched and in source order.
pub fn assemble_dataset(
    channel_id: String,
    regions: Vec<String>,
    timezones_by_region: TimezoneMap,
    rows: Vec<ScheduleRow>,
) -> Result<BuildOutcome, BuildError> {
    let span = info_span!("build", channel_id = %channel_id);
    let _guard = span.enter();

    let dataset = Dataset {
        channel_id,
        regions,
        timezones_by_region,
        rows,
    };

    let warnings: Vec<BuildWarning> = dataset
        .row_regions()
        .into_iter()
        .filter(|region| !dataset.has_region(region))
        .map(|region| BuildWarning::UnknownRegion {
            region: region.to_string(),
            row_count: dataset.row_count_for(region),
        })
        .collect();
    for warning in &warnings {
        let BuildWarning::UnknownRegion { region, row_count } = warning;
        warn!(
            region = %region,
            row_count = *row_count,
            "region found in data but not in regions list"
        );
    }

    dataset.validate()?;

    info!(
        row_count = dataset.rows.len(),
        region_count = dataset.regions.len(),
        warning_count = warnings.len(),
        "dataset built"
    );
    Ok(BuildOutcome { dataset, warnings })
}
