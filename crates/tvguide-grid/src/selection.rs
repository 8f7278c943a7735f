//! Default selection and timezone availability.
//!
//! All functions here are pure over the dataset; callers re-run them whenever
//! the active region changes.

use tracing::warn;
use tvguide_model::{Dataset, GuideOptions, Selection, Timezone};

/// The market that is only ever offered in one timezone, whatever its
/// mapping declares.
///
/// This is a fixed exception, not a configurable rule: no other region can be
/// pinned this way.
pub const SINGLE_TIMEZONE_REGION: &str = "South Africa";

/// The one timezone offered for [`SINGLE_TIMEZONE_REGION`].
pub const SINGLE_TIMEZONE: Timezone = Timezone::Cat;

/// Timezones offered for `region`, with the single-timezone market pinned.
///
/// Unknown regions get an empty list.
pub fn available_timezones(dataset: &Dataset, region: &str) -> Vec<Timezone> {
    if region == SINGLE_TIMEZONE_REGION {
        return vec![SINGLE_TIMEZONE];
    }
    dataset
        .timezones_for(region)
        .map(<[Timezone]>::to_vec)
        .unwrap_or_default()
}

/// First declared region, if any.
pub fn default_region(dataset: &Dataset) -> Option<&str> {
    dataset.regions.first().map(String::as_str)
}

/// First available timezone of `region`, if any.
pub fn default_timezone(dataset: &Dataset, region: &str) -> Option<Timezone> {
    available_timezones(dataset, region).first().copied()
}

/// Regions offered as tabs: the enabled subset when one is given, otherwise
/// every declared region in declaration order.
pub fn visible_regions<'a>(dataset: &'a Dataset, enabled: &'a [String]) -> Vec<&'a str> {
    let source: &[String] = if enabled.is_empty() {
        &dataset.regions
    } else {
        enabled
    };
    source.iter().map(String::as_str).collect()
}

/// Picks the initial selection.
///
/// An explicit region or timezone in `options` wins over the policy
/// defaults. Without an explicit region the first visible region is used.
/// Returns `None` when no region can be chosen, or when the chosen region has
/// no timezone and none was given.
pub fn resolve_selection(dataset: &Dataset, options: &GuideOptions) -> Option<Selection> {
    let region = match options.default_region.as_deref() {
        Some(region) => region,
        None => visible_regions(dataset, &options.regions_enabled)
            .first()
            .copied()?,
    };
    let timezone = match options.default_timezone {
        Some(timezone) => {
            if !available_timezones(dataset, region).contains(&timezone) {
                warn!(
                    region = %region,
                    timezone = %timezone,
                    "requested timezone is not offered for region"
                );
            }
            timezone
        }
        None => default_timezone(dataset, region)?,
    };
    Some(Selection::new(region, timezone))
}

/// The selection after switching to `region`: its default timezone, or the
/// current timezone when the region offers none.
pub fn switch_region(dataset: &Dataset, current: &Selection, region: &str) -> Selection {
    let timezone = default_timezone(dataset, region).unwrap_or(current.timezone);
    Selection::new(region, timezone)
}
