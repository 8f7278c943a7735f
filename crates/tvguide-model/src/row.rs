//! One broadcast slot, in the exact shape of the source sheet.
//!
//! Field names serialize to the sheet's column headers so a persisted dataset
//! stays readable next to the spreadsheet it came from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timezone::Timezone;

/// Column headers of the schedule sheet.
pub mod columns {
    pub const REGION: &str = "Region";
    pub const DATE: &str = "Date";
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TITLE: &str = "Title";
    pub const SEASON: &str = "Season";
    pub const EPISODE: &str = "Episode";
    pub const SUBTITLE: &str = "Subtitle";
    pub const TEXT_COLOR: &str = "Text Color";
    pub const BG_COLOR: &str = "BG Color";
    pub const TIMEZONE: &str = "Timezone";
}

/// Label format of the `Date` column: `Monday, October 6, 2025`.
pub const DAY_LABEL_FORMAT: &str = "%A, %B %-d, %Y";

/// Every column a source sheet must expose, in sheet order.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    columns::REGION,
    columns::DATE,
    columns::START_TIME,
    columns::END_TIME,
    columns::TITLE,
    columns::SEASON,
    columns::EPISODE,
    columns::SUBTITLE,
    columns::TEXT_COLOR,
    columns::BG_COLOR,
    columns::TIMEZONE,
];

/// A display-only cell that the sheet may hold as text or as a number
/// (season and episode numbers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CellValue {
    /// Interprets a raw sheet cell, keeping numeric-looking values as numbers.
    pub fn from_raw(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            return CellValue::Integer(value);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => CellValue::Decimal(value),
            _ => CellValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Decimal(value) => write!(f, "{value}"),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

/// One broadcast slot.
///
/// `date` is a pre-formatted day label such as `"Monday, October 6, 2025"` and
/// the times are `"H:MM"` strings. None of them are parsed into calendar
/// values; they are compared as text, except for start-time ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Season", default, skip_serializing_if = "Option::is_none")]
    pub season: Option<CellValue>,
    #[serde(rename = "Episode", default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<CellValue>,
    #[serde(rename = "Subtitle", default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "Text Color", default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(rename = "BG Color", default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(rename = "Timezone")]
    pub timezone: Timezone,
}

impl ScheduleRow {
    /// Creates a row with only the required fields set.
    pub fn new(
        region: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
        timezone: Timezone,
    ) -> Self {
        Self {
            region: region.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
            season: None,
            episode: None,
            subtitle: None,
            text_color: None,
            background_color: None,
            timezone,
        }
    }

    #[must_use]
    pub fn with_episode(mut self, season: Option<CellValue>, episode: Option<CellValue>) -> Self {
        self.season = season;
        self.episode = episode;
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, text: Option<String>, background: Option<String>) -> Self {
        self.text_color = text;
        self.background_color = background;
        self
    }

    /// True when the row belongs to the given region and timezone.
    pub fn matches(&self, region: &str, timezone: Timezone) -> bool {
        self.region == region && self.timezone == timezone
    }
}
