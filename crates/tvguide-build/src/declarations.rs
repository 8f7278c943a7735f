//! Parsing of the caller-declared region list and timezone map.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::warn;
use tvguide_model::{Timezone, TimezoneMap};

use crate::error::BuildError;

/// Splits a comma-delimited region list into trimmed, non-empty, distinct
/// names in declaration order.
///
/// A repeated name keeps its first position.
pub fn parse_region_list(raw: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut regions = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if seen.insert(name) {
            regions.push(name.to_string());
        } else {
            warn!(region = %name, "region declared more than once; keeping first");
        }
    }
    regions
}

/// Parses a JSON object mapping region name to an array of timezone codes.
///
/// Every entry is checked, declared region or not: the value must be an array,
/// every element a code from the closed set, and the array non-empty.
/// Timezone order within each array is kept.
pub fn parse_timezone_map(raw: &str) -> Result<TimezoneMap, BuildError> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|source| BuildError::TimezoneMapJson { source })?;
    let Value::Object(entries) = parsed else {
        return Err(BuildError::TimezoneMapNotObject);
    };
    let mut map = TimezoneMap::new();
    for (region, value) in entries {
        let Value::Array(codes) = value else {
            return Err(BuildError::MalformedTimezoneMap { region });
        };
        let mut timezones = Vec::with_capacity(codes.len());
        for code in codes {
            timezones.push(parse_code(&code)?);
        }
        if timezones.is_empty() {
            return Err(BuildError::EmptyTimezoneList { region });
        }
        map.insert(region, timezones);
    }
    Ok(map)
}

fn parse_code(code: &Value) -> Result<Timezone, BuildError> {
    let invalid = |code: String| BuildError::InvalidTimezone {
        code,
        valid: Timezone::valid_codes(),
    };
    match code {
        Value::String(text) => text.parse().map_err(|_| invalid(text.clone())),
        other => Err(invalid(other.to_string())),
    }
}
